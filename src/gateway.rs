pub mod events;
pub mod factory;
pub mod logs;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Disabled,
}
