mod tls;

pub use tls::*;
