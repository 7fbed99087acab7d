use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use fanout_channel::{
    ChannelConfig, ChannelError, Handler, Notification, Outcome, SubscriberChannel,
    SubscriberChannelCore,
};

struct MyNotifier {
    channel: SubscriberChannelCore<String>,
    listening: Cell<bool>,
}

impl MyNotifier {
    fn new() -> Self {
        Self {
            channel: SubscriberChannelCore::with_config(ChannelConfig::named("my-notifier")),
            listening: Cell::new(false),
        }
    }

    fn test(&self, data: &str) -> Outcome {
        self.notify_data(data.to_owned())
    }

    fn crash(&self, reason: &str) -> Outcome {
        self.notify_failure(io::Error::other(reason.to_owned()))
    }
}

impl SubscriberChannel<String> for MyNotifier {
    fn subscriber_channel(&self) -> &SubscriberChannelCore<String> {
        &self.channel
    }
    fn on_add_first_handler(&self) {
        self.listening.set(true);
    }
    fn on_remove_last_handler(&self) {
        self.listening.set(false);
    }
}

#[derive(Default)]
struct Journal {
    calls: Cell<usize>,
    data: RefCell<Vec<String>>,
    failures: RefCell<Vec<String>>,
}

fn journaling(journal: &Rc<Journal>) -> Handler<Notification<String>> {
    let journal = Rc::clone(journal);
    Handler::sync(move |n: &Notification<String>| {
        journal.calls.set(journal.calls.get() + 1);
        match n {
            Notification::Event(ev) => journal.data.borrow_mut().push(ev.data.clone()),
            Notification::Failure(err) => journal.failures.borrow_mut().push(err.to_string()),
        }
        Ok(())
    })
}

#[tokio::test]
async fn test_positive_scenario() {
    let notifier = MyNotifier::new();
    let journal = Rc::new(Journal::default());
    let h = journaling(&journal);

    notifier.add_handler(h.clone()).unwrap();
    notifier.add_handler(h.clone()).unwrap();
    notifier.test("one").await.unwrap();
    notifier.test("two").await.unwrap();
    notifier.remove_handler(&h);
    notifier.test("three").await.unwrap();
    notifier.remove_handler(&h);
    notifier.test("four").await.unwrap();

    assert_eq!(journal.calls.get(), 5);
    assert_eq!(*journal.data.borrow(), vec!["one", "one", "two", "two", "three"]);
    assert!(!notifier.is_broken());
}

#[tokio::test]
async fn test_negative_scenario() {
    let notifier = MyNotifier::new();
    let journal = Rc::new(Journal::default());
    let h = journaling(&journal);

    notifier.add_handler(h.clone()).unwrap();
    notifier.add_handler(h.clone()).unwrap();
    notifier.crash("one").await.unwrap();
    assert!(!notifier.listening.get());

    notifier.remove_handler(&h);
    notifier.crash("two").await.unwrap();
    notifier.remove_handler(&h);
    notifier.crash("three").await.unwrap();

    assert_eq!(journal.calls.get(), 2);
    assert_eq!(*journal.failures.borrow(), vec!["one", "one"]);
}

#[tokio::test]
async fn test_break_then_reject() {
    let notifier = MyNotifier::new();
    let journal = Rc::new(Journal::default());
    let (a, b) = (journaling(&journal), journaling(&journal));
    notifier.add_handler(a).unwrap();
    notifier.add_handler(b).unwrap();
    assert!(notifier.listening.get());

    notifier.crash("fatal").await.unwrap();
    assert!(notifier.is_broken());
    assert!(!notifier.has_subscribers());
    assert_eq!(*journal.failures.borrow(), vec!["fatal", "fatal"]);

    let late = journaling(&journal);
    match notifier.add_handler(late) {
        Err(ChannelError::InvalidOperation { reason }) => {
            assert_eq!(reason, "wrong operation on broken channel");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!notifier.has_subscribers());
    assert!(!notifier.listening.get());

    notifier.test("after").await.unwrap();
    assert_eq!(journal.calls.get(), 2);
}

#[tokio::test]
async fn test_async_subscribers_observe_failure_once() {
    let notifier = MyNotifier::new();
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();

    for delay in [30, 10] {
        let seen = Rc::clone(&seen);
        notifier
            .add_handler(Handler::future(move |n: &Notification<String>| {
                let entry = n.as_failure().map(ToString::to_string);
                let seen = Rc::clone(&seen);
                async move {
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    if let Some(entry) = entry {
                        seen.borrow_mut().push(entry);
                    }
                    Ok(())
                }
            }))
            .unwrap();
    }

    let outcome = notifier.crash("gone");
    assert!(notifier.is_broken());
    assert!(outcome.is_pending());
    outcome.await.unwrap();
    assert_eq!(seen.borrow().len(), 2);
}

#[tokio::test]
async fn test_single_subscriber_failure_on_break_is_not_wrapped() {
    let notifier = MyNotifier::new();
    notifier
        .add_handler(Handler::sync(|_: &Notification<String>| {
            Err(ChannelError::cancelled("already closing"))
        }))
        .unwrap();

    match notifier.crash("x").await {
        Err(ChannelError::Cancelled { reason }) => assert_eq!(reason, "already closing"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(notifier.is_broken());
}

#[tokio::test]
async fn test_strict_channel_rejects_notify_after_break() {
    let core: SubscriberChannelCore<u32> = SubscriberChannelCore::with_config(ChannelConfig {
        reject_after_break: true,
        ..ChannelConfig::default()
    });
    core.notify(Notification::failure("closed")).await.unwrap();

    let err = core.notify_data(1).await.unwrap_err();
    assert_eq!(err.as_label(), "channel_invalid_operation");
    let err = core.notify(Notification::failure("again")).await.unwrap_err();
    assert_eq!(err.as_label(), "channel_invalid_operation");
}
