mod service;

pub use service::ReviewService;
