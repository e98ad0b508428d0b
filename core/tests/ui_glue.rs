//! Integration tests for the event bus and async operation tracker working
//! together, the way a deposit flow uses them: the tracker follows the
//! transaction, and the outcome is broadcast so other views can refresh.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use bluevault_core::async_op::{wait_for, AsyncOperation, AsyncStatus, Completion};
use bluevault_core::errors::{handle_contract_error, ContractError};
use bluevault_core::events::{names, EventBus, EventBusError};

#[derive(Clone, Debug, PartialEq)]
enum TxEvent {
    Pending { vault_id: u64 },
    Confirmed { vault_id: u64, hash: String },
    Failed { vault_id: u64, message: String },
}

/// Runs one tracked deposit and publishes its outcome.
async fn deposit_flow(
    bus: &EventBus<TxEvent>,
    op: &AsyncOperation<String, ContractError>,
    vault_id: u64,
) -> Result<Completion, EventBusError> {
    bus.emit(names::TRANSACTION_PENDING, &TxEvent::Pending { vault_id })?;
    let completion = op.execute().await;
    if completion == Completion::Superseded {
        return Ok(completion);
    }
    match (op.value(), op.error()) {
        (Some(hash), None) => {
            bus.emit(names::TRANSACTION_CONFIRMED, &TxEvent::Confirmed { vault_id, hash })?;
            bus.emit(names::DEPOSIT_SUCCESS, &TxEvent::Confirmed {
                vault_id,
                hash: String::new(),
            })?;
        }
        (None, Some(err)) => {
            bus.emit(names::TRANSACTION_FAILED, &TxEvent::Failed {
                vault_id,
                message: err.user_message(),
            })?;
        }
        other => unreachable!("terminal state must hold exactly one outcome: {other:?}"),
    }
    Ok(completion)
}

fn record_all(bus: &EventBus<TxEvent>, log: &Arc<Mutex<Vec<(String, TxEvent)>>>) {
    for name in [
        names::TRANSACTION_PENDING,
        names::TRANSACTION_CONFIRMED,
        names::TRANSACTION_FAILED,
    ] {
        let log = Arc::clone(log);
        bus.on_fn(name, move |event: &TxEvent| {
            log.lock().push((name.to_string(), event.clone()));
            Ok(())
        });
    }
}

#[tokio::test]
async fn confirmed_deposit_is_broadcast() {
    let bus = EventBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    record_all(&bus, &log);

    let op = AsyncOperation::new(|| async { Ok::<_, ContractError>("0xfeed".to_string()) });
    assert_eq!(deposit_flow(&bus, &op, 4).await.unwrap(), Completion::Recorded);

    let log = log.lock();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], (names::TRANSACTION_PENDING.to_string(), TxEvent::Pending { vault_id: 4 }));
    assert_eq!(
        log[1].1,
        TxEvent::Confirmed {
            vault_id: 4,
            hash: "0xfeed".into()
        }
    );
}

#[tokio::test]
async fn rejected_deposit_reports_user_message() {
    let bus = EventBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    record_all(&bus, &log);

    let op = AsyncOperation::new(|| async {
        Err::<String, _>(ContractError::from_message("User rejected the request."))
    });
    deposit_flow(&bus, &op, 9).await.unwrap();

    assert_eq!(op.status(), AsyncStatus::Error);
    let log = log.lock();
    assert_eq!(
        log.last().map(|(_, e)| e.clone()),
        Some(TxEvent::Failed {
            vault_id: 9,
            message: handle_contract_error("user rejected"),
        })
    );
}

#[tokio::test]
async fn failing_subscriber_surfaces_to_publisher() {
    let bus = EventBus::new();
    bus.on_fn(names::TRANSACTION_PENDING, |_: &TxEvent| anyhow::bail!("view gone"));

    let op = AsyncOperation::new(|| async { Ok::<_, ContractError>("0x1".to_string()) });
    let err = deposit_flow(&bus, &op, 1).await.unwrap_err();
    assert!(err.to_string().contains("view gone"));
    assert_eq!(op.status(), AsyncStatus::Idle);
}

#[tokio::test]
async fn resubmission_supersedes_the_first_attempt() {
    let gates: Arc<Mutex<Vec<oneshot::Receiver<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    // Popped from the back.
    gates.lock().extend([second_rx, first_rx]);

    let source = Arc::clone(&gates);
    let op = AsyncOperation::new(move || {
        let gate = source.lock().pop();
        async move {
            match gate {
                Some(rx) => rx
                    .await
                    .map_err(|_| ContractError::Other("dropped".into())),
                None => Err(ContractError::Other(String::new())),
            }
        }
    });

    let bus: EventBus<TxEvent> = EventBus::new();
    let confirmed = Arc::new(Mutex::new(Vec::new()));
    {
        let confirmed = Arc::clone(&confirmed);
        bus.on_fn(names::TRANSACTION_CONFIRMED, move |e: &TxEvent| {
            confirmed.lock().push(e.clone());
            Ok(())
        });
    }

    let first = tokio::spawn({
        let bus = bus.clone();
        let op = op.clone();
        async move { deposit_flow(&bus, &op, 1).await }
    });
    assert!(
        wait_for(
            || op.generation() == 1,
            Duration::from_secs(1),
            Duration::from_millis(1)
        )
        .await
    );

    let second = tokio::spawn({
        let bus = bus.clone();
        let op = op.clone();
        async move { deposit_flow(&bus, &op, 1).await }
    });
    assert!(
        wait_for(
            || op.generation() == 2,
            Duration::from_secs(1),
            Duration::from_millis(1)
        )
        .await
    );

    second_tx.send("0xsecond".into()).unwrap();
    assert_eq!(second.await.unwrap().unwrap(), Completion::Recorded);

    first_tx.send("0xfirst".into()).unwrap();
    assert_eq!(first.await.unwrap().unwrap(), Completion::Superseded);

    assert_eq!(op.value().as_deref(), Some("0xsecond"));
    assert_eq!(
        *confirmed.lock(),
        vec![TxEvent::Confirmed {
            vault_id: 1,
            hash: "0xsecond".into()
        }]
    );
}
