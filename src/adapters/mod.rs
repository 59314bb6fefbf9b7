// Adapters layer: concrete implementations for the external systems the
// workflow talks to (the fragrance catalog endpoint and the board API).

pub mod http;
