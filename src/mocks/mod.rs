//! Mock implementations of the transport and auth seams, so services and the
//! minibatch engine can be exercised without network access.

#[cfg(test)]
mod mock_auth;
#[cfg(test)]
mod mock_transport;

#[cfg(test)]
pub use mock_auth::MockAuthManager;
#[cfg(test)]
pub use mock_transport::{MockHttpTransport, MockRequest};
