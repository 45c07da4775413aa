//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one kind of resource (the [`ActorEntity`]). Instead of
/// defining ad-hoc messages per operation, we standardize on a lifecycle that
/// applies to almost any persistent resource.
///
/// - **Create**: lifecycle start, uses [`ActorEntity::Create`].
/// - **Get**: fetch one entity by id.
/// - **List**: snapshot of every entity matching a [`ActorEntity::Filter`],
///   in creation order.
/// - **Update**: mutate one entity via [`ActorEntity::Update`].
/// - **Delete**: lifecycle end.
/// - **Drain**: atomically remove and return every entity matching a filter.
///   Because the actor processes messages sequentially, the removal and the
///   returned snapshot are one indivisible step; this is what makes
///   cart-to-order conversion safe against double submission.
/// - **Action**: extensibility hook for resource-specific operations.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Drain {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
