//! Locating the DOM node the application mounts into.

/// Id of the element the application renders into.
pub const MOUNT_POINT_ID: &str = "root";

/// Startup cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("mount point #{id} not found in the document")]
    Missing { id: &'static str },

    #[error("no document available to mount into")]
    NoDocument,
}

/// Find the mount node with `lookup`, which resolves an element id.
pub fn locate_mount_point<T>(
    id: &'static str,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Result<T, MountError> {
    lookup(id).ok_or(MountError::Missing { id })
}

/// Check the current page for [`MOUNT_POINT_ID`].
#[cfg(target_arch = "wasm32")]
pub fn check() -> Result<(), MountError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;
    locate_mount_point(MOUNT_POINT_ID, |id| document.get_element_by_id(id)).map(|_| ())
}

/// Native builds have no document; the renderer owns its window.
#[cfg(not(target_arch = "wasm32"))]
pub fn check() -> Result<(), MountError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_finds_element() {
        let found = locate_mount_point(MOUNT_POINT_ID, |id| (id == "root").then_some(42));
        assert_eq!(found, Ok(42));
    }

    #[test]
    fn test_locate_reports_missing_id() {
        let err = locate_mount_point(MOUNT_POINT_ID, |_| None::<()>).unwrap_err();
        assert_eq!(err, MountError::Missing { id: "root" });
        assert_eq!(err.to_string(), "mount point #root not found in the document");
    }
}
