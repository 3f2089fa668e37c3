use std::fs;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use lynx_watcher::engine::RuntimeEvent;
use lynx_watcher::watch::{spawn_watcher, WatchProfile};

const RECV: Duration = Duration::from_secs(10);

#[tokio::test]
async fn change_under_watched_glob_reaches_the_runtime() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("app/code/Foo")).unwrap();
    fs::create_dir_all(root.path().join("node_modules/leftpad")).unwrap();

    let patterns = vec!["app/code/**/*.phtml".to_string()];
    let profile = WatchProfile::compile(&patterns).unwrap();

    let (rt_tx, mut rt_rx) = mpsc::channel::<RuntimeEvent>(64);
    let _watcher = spawn_watcher(root.path(), profile, rt_tx).unwrap();

    // Give the OS watcher a moment to settle before producing events.
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Ignored: not matching the glob / under node_modules.
    fs::write(root.path().join("app/code/Foo/notes.txt"), "ignored").unwrap();
    fs::write(
        root.path().join("node_modules/leftpad/index.js"),
        "ignored",
    )
    .unwrap();

    fs::write(
        root.path().join("app/code/Foo/view.phtml"),
        "<p>hello</p>",
    )
    .unwrap();

    let event = timeout(RECV, rt_rx.recv())
        .await
        .expect("timed out waiting for file change")
        .expect("watcher channel closed");

    match event {
        RuntimeEvent::FileChanged { path } => {
            assert_eq!(path, "app/code/Foo/view.phtml");
        }
        other => panic!("expected FileChanged, got {other:?}"),
    }
}
