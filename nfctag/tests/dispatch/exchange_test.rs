#[cfg(feature = "async")]
use std::sync::Arc;

use nfctag::prelude::*;
use nfctag::test_support::SharedMock;

use crate::common::fixtures::{text_message, NDEF, ULTRALIGHT};

#[test]
fn dispatch_operation_values() {
    let mock = SharedMock::with_responses(vec![vec![0x0A]; 2]);
    let mut tag = mock.tag_with_ndef(NDEF, vec![text_message("en", "hi")]);
    let dispatcher = TagDispatcher::new();

    assert_eq!(
        dispatcher.dispatch(&mut tag, &Operation::Read).unwrap(),
        Outcome::Read(b"hi".to_vec())
    );
}

#[test]
fn cancelled_before_start() {
    let token = CancelToken::new();
    token.cancel();
    let mock = SharedMock::new();
    let mut tag = mock.tag(ULTRALIGHT);
    let result = Exchange::read()
        .with_token(token)
        .run(&TagDispatcher::new(), &mut tag);
    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(mock.sent().is_empty());
}

#[cfg(feature = "async")]
#[tokio::test]
async fn exchanges_on_separate_tags_run_concurrently() {
    let dispatcher = Arc::new(TagDispatcher::new());
    let first = SharedMock::with_responses([vec![0x11; 16]]);
    let second = SharedMock::with_responses([vec![0x22; 16]]);

    let a = spawn(dispatcher.clone(), first.tag(ULTRALIGHT), Exchange::read());
    let b = spawn(dispatcher, second.tag(ULTRALIGHT), Exchange::read());
    let (a, b) = (a.join().await.unwrap(), b.join().await.unwrap());

    assert_eq!(a.result.unwrap(), Outcome::Read(vec![0x11; 16]));
    assert_eq!(b.result.unwrap(), Outcome::Read(vec![0x22; 16]));
    assert_eq!(first.lock().close_count, 1);
    assert_eq!(second.lock().close_count, 1);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn tag_is_reusable_after_completion() {
    let dispatcher = Arc::new(TagDispatcher::new());
    let mock = SharedMock::with_responses([vec![0x0A], vec![0x33; 16]]);

    let written = spawn(dispatcher.clone(), mock.tag(ULTRALIGHT), Exchange::write(vec![1, 2, 3, 4]))
        .join()
        .await
        .unwrap();
    assert_eq!(written.result.unwrap(), Outcome::Written);

    let read = spawn(dispatcher, written.tag, Exchange::read()).join().await.unwrap();
    assert_eq!(read.result.unwrap().into_data(), Some(vec![0x33; 16]));
    assert_eq!(mock.lock().connect_count, 2);
}
