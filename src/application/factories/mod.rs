mod trigger_factory;

pub use trigger_factory::TriggerFactory;
