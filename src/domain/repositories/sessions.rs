use mockall::automock;

/// Read side of the authentication boundary. Only used to decide whether a
/// privileged action can be attributed to a concrete actor.
#[automock]
pub trait SessionGateway: Send + Sync {
    fn current_identity(&self) -> Option<String>;
}
