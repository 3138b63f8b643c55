use std::time::Duration;

use carelink_app::search::Debouncer;
use pretty_assertions::assert_eq;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_only_last_input_in_window_settles() {
    let debouncer = Debouncer::new(Duration::from_millis(500));

    let first = debouncer.submit("ca");
    let second = debouncer.submit("car");
    let third = debouncer.submit("card ");

    let (first, second, third) = tokio::join!(first.settle(), second.settle(), third.settle());

    assert_eq!(first, None);
    assert_eq!(second, None);
    assert_eq!(third.as_deref(), Some("card"));
}

#[tokio::test(start_paused = true)]
async fn test_settling_waits_out_the_window() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let started = Instant::now();

    let settled = debouncer.submit("derm").settle().await;

    assert_eq!(settled.as_deref(), Some("derm"));
    assert!(started.elapsed() >= Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_input_typed_while_waiting_supersedes() {
    let debouncer = Debouncer::new(Duration::from_millis(500));
    let early = debouncer.submit("pe");

    let typist = {
        let debouncer = debouncer.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            debouncer.submit("pedia").settle().await
        })
    };

    assert_eq!(early.settle().await, None);
    assert_eq!(typist.await.unwrap().as_deref(), Some("pedia"));
}

#[tokio::test(start_paused = true)]
async fn test_separate_bursts_each_settle() {
    let debouncer = Debouncer::new(Duration::from_millis(500));

    let first = debouncer.submit("ortho").settle().await;
    let second = debouncer.submit("neuro").settle().await;

    assert_eq!(first.as_deref(), Some("ortho"));
    assert_eq!(second.as_deref(), Some("neuro"));
}
