// Contact backend: validates form submissions and persists them through a
// pluggable `ContactStore`.

pub mod handlers;
pub mod store;
pub mod validation;
