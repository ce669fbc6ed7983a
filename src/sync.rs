//! Lock used for the game's interior state.
//!
//! Backed by `std::sync::Mutex` with poisoning ignored, or by a spin lock
//! when built without `std`. Both expose the same `new`/`lock` surface.

#[cfg(feature = "std")]
type Raw<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
pub type MutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(not(feature = "std"))]
type Raw<T> = spin::Mutex<T>;
#[cfg(not(feature = "std"))]
pub type MutexGuard<'a, T> = spin::MutexGuard<'a, T>;

pub struct Mutex<T>(Raw<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Raw::new(value))
    }

    /// Ignores poisoning.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(not(feature = "std"))]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock()
    }
}
