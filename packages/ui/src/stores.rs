//! Store locations for the signed-in user.

use dioxus::prelude::*;

use crate::context::{require_context, try_require_context, MissingProvider};
use crate::scoped::{use_scoped_provider, ScopedState};

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
}

pub type StoreState = ScopedState<Store>;

pub fn use_stores() -> Signal<StoreState> {
    require_context("use_stores", "StoreProvider")
}

pub fn try_use_stores() -> Result<Signal<StoreState>, MissingProvider> {
    try_require_context("use_stores", "StoreProvider")
}

#[component]
pub fn StoreProvider(children: Element) -> Element {
    use_scoped_provider::<Store>();

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Seen(Rc<RefCell<Option<Result<(), MissingProvider>>>>);

    impl PartialEq for Seen {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    #[component]
    fn Lookup(seen: Seen) -> Element {
        seen.0.replace(Some(try_use_stores().map(|_| ())));
        rsx! {}
    }

    #[test]
    fn test_try_use_stores_without_provider() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(Lookup, LookupProps { seen: seen.clone() });
        dom.rebuild_in_place();

        let err = seen.0.borrow().clone().unwrap().unwrap_err();
        assert_eq!(
            err,
            MissingProvider {
                hook: "use_stores",
                provider: "StoreProvider",
            }
        );
    }
}
