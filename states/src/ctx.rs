use std::any::TypeId;
use std::collections::BTreeMap;

use crate::State;

/// Container for every registered [`State`], keyed by type.
///
/// One instance of each state type exists at a time; registering again
/// replaces the previous instance. Lookups for a type that was never
/// registered panic: registration happens once during app construction,
/// so a miss is a programming error, not a runtime condition.
#[derive(Default)]
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn State>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`, replacing any earlier instance of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Returns a shared reference to the registered `T`.
    pub fn state<T: State>(&self) -> &T {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| missing_state::<T>())
    }

    /// Returns a mutable reference to the registered `T`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| missing_state::<T>())
    }

    /// Runs `f` against the registered `T`.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

fn missing_state<T>() -> ! {
    panic!(
        "state {} is not registered in this StateCtx",
        std::any::type_name::<T>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Counter {
        value: u32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_add_and_read_state() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 3 });

        assert!(ctx.has_state::<Counter>());
        assert_eq!(ctx.state::<Counter>().value, 3);
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_state_mut_and_update() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        ctx.state_mut::<Counter>().value = 7;
        assert_eq!(ctx.state::<Counter>().value, 7);

        ctx.update::<Counter>(|counter| counter.value += 1);
        assert_eq!(ctx.state::<Counter>().value, 8);
    }

    #[test]
    fn test_add_state_replaces_previous_instance() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 1 });
        ctx.add_state(Counter { value: 2 });

        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.state::<Counter>().value, 2);
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_missing_state_panics_with_type_name() {
        let ctx = StateCtx::new();
        let _ = ctx.state::<Counter>();
    }
}
