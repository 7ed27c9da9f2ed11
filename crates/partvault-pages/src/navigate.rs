//! Navigation effect boundary
//!
//! Row clicks end in a full navigation of the current browsing context.
//! That effect goes through [`Navigate`] so the browser implementation
//! ([`LocationNavigator`]) can be swapped for
//! [`RecordingNavigator`](crate::testing::RecordingNavigator) in tests.

/// Errors reported by a [`Navigate`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
	/// No `window` object is reachable.
	#[error("Window not available")]
	WindowUnavailable,
	/// The browser refused the navigation.
	#[error("Navigation rejected: {0}")]
	Rejected(String),
}

/// Performs a full navigation to a location.
pub trait Navigate {
	/// Navigates the current browsing context to `location`.
	///
	/// `location` may be relative or absolute; resolving it is the
	/// browser's concern.
	fn navigate(&self, location: &str) -> Result<(), NavigationError>;
}

impl<N: Navigate + ?Sized> Navigate for std::rc::Rc<N> {
	fn navigate(&self, location: &str) -> Result<(), NavigationError> {
		(**self).navigate(location)
	}
}

impl<N: Navigate + ?Sized> Navigate for &N {
	fn navigate(&self, location: &str) -> Result<(), NavigationError> {
		(**self).navigate(location)
	}
}

/// Navigates by assigning `window.location.href`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigate for LocationNavigator {
	fn navigate(&self, location: &str) -> Result<(), NavigationError> {
		let window = web_sys::window().ok_or(NavigationError::WindowUnavailable)?;
		window.location().set_href(location).map_err(|err| {
			NavigationError::Rejected(
				err.as_string()
					.unwrap_or_else(|| format!("{:?}", err)),
			)
		})
	}
}
