/// Defines a `Droppable` type local to the calling test.
///
/// `Droppable::count()` is the number of live instances, `Droppable::drops()`
/// the total number of destructor runs. Every expansion gets its own
/// counters, so tests running in parallel don't see each other.
macro_rules! droppable {
    () => {
        static LIVE: core::sync::atomic::AtomicI32 = core::sync::atomic::AtomicI32::new(0);
        static DROPS: core::sync::atomic::AtomicI32 = core::sync::atomic::AtomicI32::new(0);

        #[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
        struct Droppable(i32);
        impl Droppable {
            fn new() -> Self {
                Droppable(LIVE.fetch_add(1, core::sync::atomic::Ordering::Relaxed) + 1)
            }

            fn count() -> i32 {
                LIVE.load(core::sync::atomic::Ordering::Relaxed)
            }

            #[allow(dead_code)]
            fn drops() -> i32 {
                DROPS.load(core::sync::atomic::Ordering::Relaxed)
            }
        }
        impl Clone for Droppable {
            fn clone(&self) -> Self {
                LIVE.fetch_add(1, core::sync::atomic::Ordering::Relaxed);
                Droppable(self.0)
            }
        }
        impl Drop for Droppable {
            fn drop(&mut self) {
                LIVE.fetch_sub(1, core::sync::atomic::Ordering::Relaxed);
                DROPS.fetch_add(1, core::sync::atomic::Ordering::Relaxed);
            }
        }
    };
}
