use async_trait::async_trait;
use resource_actor::{ActorEntity, ResourceActor};
use std::collections::HashMap;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    title: String,
    closed: bool,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
}

#[derive(Debug)]
struct TicketUpdate {
    title: Option<String>,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug)]
enum TicketStoreAction {
    CloseAll,
    CountOpen,
}

#[derive(Debug)]
enum TicketStoreResult {
    Closed(Vec<u32>),
    OpenCount(usize),
}

#[derive(Debug, thiserror::Error)]
#[error("ticket error")]
struct TicketError;

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = bool;
    type StoreAction = TicketStoreAction;
    type StoreActionResult = TicketStoreResult;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
            closed: false,
        })
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Close => {
                if self.closed {
                    Ok(false)
                } else {
                    self.closed = true;
                    Ok(true)
                }
            }
        }
    }

    async fn handle_store_action(
        store: &mut HashMap<u32, Self>,
        action: TicketStoreAction,
        _ctx: &Self::Context,
    ) -> Result<TicketStoreResult, Self::Error> {
        match action {
            TicketStoreAction::CloseAll => {
                let mut closed = Vec::new();
                for ticket in store.values_mut() {
                    if !ticket.closed {
                        ticket.closed = true;
                        closed.push(ticket.id);
                    }
                }
                closed.sort_unstable();
                Ok(TicketStoreResult::Closed(closed))
            }
            TicketStoreAction::CountOpen => {
                Ok(TicketStoreResult::OpenCount(
                    store.values().filter(|t| !t.closed).count(),
                ))
            }
        }
    }
}

fn spawn_ticket_actor() -> resource_actor::ResourceClient<Ticket> {
    let mut next = 0u32;
    let (actor, client) = ResourceActor::<Ticket>::new(10, move || {
        next += 1;
        next
    });
    tokio::spawn(actor.run(()));
    client
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = spawn_ticket_actor();

    // 1. Create - ids come from the injected factory, starting at 1
    let id = client
        .create(TicketCreate {
            title: "Broken build".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // 2. Perform Action: Close
    let changed = client.perform_action(id, TicketAction::Close).await.unwrap();
    assert!(changed);

    // Verify state
    let ticket = client.get(id).await.unwrap().unwrap();
    assert!(ticket.closed);

    // 3. Perform Action: Close again (should return false)
    let changed_again = client.perform_action(id, TicketAction::Close).await.unwrap();
    assert!(!changed_again);

    // 4. Update
    let update = TicketUpdate {
        title: Some("Broken release build".into()),
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.title, "Broken release build");

    // 5. Delete
    client.delete(id).await.unwrap();
    let deleted = client.get(id).await.unwrap();
    assert!(deleted.is_none());
}

#[tokio::test]
async fn test_store_action_scans_every_entity() {
    let client = spawn_ticket_actor();

    for title in ["a", "b", "c"] {
        client
            .create(TicketCreate {
                title: title.into(),
            })
            .await
            .unwrap();
    }

    // Close one by hand so the bulk action only touches the rest.
    client.perform_action(2, TicketAction::Close).await.unwrap();

    let result = client
        .perform_store_action(TicketStoreAction::CloseAll)
        .await
        .unwrap();
    match result {
        TicketStoreResult::Closed(ids) => assert_eq!(ids, vec![1, 3]),
        other => panic!("unexpected result: {:?}", other),
    }

    // Idempotence: a second pass finds nothing left to close.
    let result = client
        .perform_store_action(TicketStoreAction::CloseAll)
        .await
        .unwrap();
    match result {
        TicketStoreResult::Closed(ids) => assert!(ids.is_empty()),
        other => panic!("unexpected result: {:?}", other),
    }

    let result = client
        .perform_store_action(TicketStoreAction::CountOpen)
        .await
        .unwrap();
    match result {
        TicketStoreResult::OpenCount(n) => assert_eq!(n, 0),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_entity_yields_not_found() {
    let client = spawn_ticket_actor();

    let err = client
        .perform_action(99, TicketAction::Close)
        .await
        .unwrap_err();
    assert!(matches!(err, resource_actor::FrameworkError::NotFound(_)));

    let missing = client.get(99).await.unwrap();
    assert!(missing.is_none());
}
