pub mod jwt;
pub mod middleware;
pub mod provider;
pub mod request_id;

pub use jwt::{Claims, JwtManager};
pub use middleware::session_gate_middleware;
pub use provider::JwtAuthProvider;
pub use request_id::{request_id_middleware, RequestId};
