//! Integration tests driving a real `ResourceActor` through the full request
//! surface: CRUD, collection List/Drain, seeded stores, and concurrent drains.

use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    owner: u32,
    subject: String,
    open: bool,
}

#[derive(Debug)]
struct TicketCreate {
    owner: u32,
    subject: String,
}

#[derive(Debug)]
struct TicketUpdate {
    open: Option<bool>,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug, Clone)]
enum TicketFilter {
    All,
    ByOwner(u32),
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("subject must not be empty")]
    EmptySubject,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = bool;
    type Filter = TicketFilter;
    type Context = ();
    type Error = TicketError;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.subject.is_empty() {
            return Err(TicketError::EmptySubject);
        }
        Ok(Self {
            id,
            owner: params.owner,
            subject: params.subject,
            open: true,
        })
    }

    fn matches(&self, filter: &TicketFilter) -> bool {
        match filter {
            TicketFilter::All => true,
            TicketFilter::ByOwner(owner) => self.owner == *owner,
        }
    }

    async fn on_update(&mut self, update: TicketUpdate, _: &()) -> Result<(), Self::Error> {
        if let Some(open) = update.open {
            self.open = open;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Close => {
                let was_open = self.open;
                self.open = false;
                Ok(was_open)
            }
        }
    }
}

fn create(owner: u32, subject: &str) -> TicketCreate {
    TicketCreate {
        owner,
        subject: subject.to_string(),
    }
}

#[tokio::test]
async fn test_crud_and_action_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create(1, "printer on fire")).await.unwrap();
    assert_eq!(id, 1);

    let ticket = client.get(id).await.unwrap().unwrap();
    assert!(ticket.open);

    let was_open = client.perform_action(id, TicketAction::Close).await.unwrap();
    assert!(was_open);

    let updated = client
        .update(id, TicketUpdate { open: Some(true) })
        .await
        .unwrap();
    assert!(updated.open);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    // Deleting again reports NotFound
    let err = client.delete(id).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));
}

#[tokio::test]
async fn test_create_validation_error_surfaces_as_entity_error() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(create(1, "")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
}

#[tokio::test]
async fn test_list_is_filtered_and_creation_ordered() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create(1, "a")).await.unwrap();
    client.create(create(2, "b")).await.unwrap();
    client.create(create(1, "c")).await.unwrap();

    let all = client.list(TicketFilter::All).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(
        all.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![1, 2, 3],
        "list must come back in creation order"
    );

    let mine = client.list(TicketFilter::ByOwner(1)).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|t| t.owner == 1));
}

#[tokio::test]
async fn test_drain_removes_only_matching_entities() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create(1, "a")).await.unwrap();
    client.create(create(2, "b")).await.unwrap();
    client.create(create(1, "c")).await.unwrap();

    let drained = client.drain(TicketFilter::ByOwner(1)).await.unwrap();
    assert_eq!(drained.len(), 2);

    let remaining = client.list(TicketFilter::All).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].owner, 2);

    // Draining again finds nothing; an empty drain is not an error.
    let empty = client.drain(TicketFilter::ByOwner(1)).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_concurrent_drains_never_hand_out_the_same_entity() {
    let (actor, client) = ResourceActor::<Ticket>::new(32);
    tokio::spawn(actor.run(()));

    for i in 0..10 {
        client.create(create(1, &format!("t{i}"))).await.unwrap();
    }

    let mut handles = vec![];
    for _ in 0..4 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.drain(TicketFilter::ByOwner(1)).await.unwrap()
        }));
    }

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap().len();
    }
    // All ten tickets handed out exactly once across the racing drains.
    assert_eq!(total, 10);
    assert!(client.list(TicketFilter::All).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_with_store_seeds_entities_and_continues_id_sequence() {
    let seeded = vec![
        Ticket {
            id: 1,
            owner: 1,
            subject: "restored".to_string(),
            open: true,
        },
        Ticket {
            id: 5,
            owner: 2,
            subject: "also restored".to_string(),
            open: false,
        },
    ];
    let (actor, client) = ResourceActor::with_store(10, seeded, 6);
    tokio::spawn(actor.run(()));

    assert_eq!(client.list(TicketFilter::All).await.unwrap().len(), 2);

    let id = client.create(create(3, "fresh")).await.unwrap();
    assert_eq!(id, 6, "id sequence must continue past the seeded ids");
}
