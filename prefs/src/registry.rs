//! Theme registry and wallpaper compatibility oracle.
//!
//! The registry is an external collaborator from the engine's point of
//! view: it owns the list of themes, each theme's default wallpaper,
//! and the compatibility predicate. The engine never interprets
//! wallpaper ids itself.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Wallpaper id that is legal under every theme.
///
/// Guarantees resolution always terminates with a renderable value:
/// a theme's default wallpaper may be anything, but `plain` is the
/// terminal fallback no theme may reject.
pub const UNIVERSAL_WALLPAPER: &str = "plain";

/// Theme lookup and compatibility queries.
///
/// Implementations must be pure and total: every method returns a
/// usable answer for any input, including unknown theme ids, and never
/// panics. [`ThemeRegistry::is_compatible`] must return `true` for
/// [`UNIVERSAL_WALLPAPER`] regardless of scope.
pub trait ThemeRegistry {
    /// All registered theme ids.
    fn scope_ids(&self) -> &[&str];

    /// Theme activated on first visit and after a preference reset.
    fn default_scope(&self) -> &str;

    /// The wallpaper a theme renders when the user never picked one.
    /// Unknown theme ids resolve to [`UNIVERSAL_WALLPAPER`].
    fn default_wallpaper(&self, scope: &str) -> &str;

    /// Whether `candidate` is a legal wallpaper under `scope`.
    fn is_compatible(&self, scope: &str, candidate: &str) -> bool;

    /// Whether `id` names a registered theme.
    fn is_scope(&self, id: &str) -> bool {
        self.scope_ids().contains(&id)
    }
}
