use leveled_logger::{LeveledLogger, infof};
use std::{sync::Arc, thread};

const THREADS: usize = 8;
const CALLS_PER_THREAD: usize = 200;

#[test]
fn concurrent_writers_never_interleave() {
    let logger = Arc::new(LeveledLogger::new(Vec::new()));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = logger.clone();
            thread::spawn(move || {
                let payload = format!("{thread_id}").repeat(64);
                for call in 0..CALLS_PER_THREAD {
                    match call % 4 {
                        0 => infof!(logger, "t{thread_id} {payload}"),
                        1 => logger.warning(format!("t{thread_id} {payload}")),
                        2 => logger.error(format!("t{thread_id} {payload}")),
                        _ => logger.debug(true, format!("t{thread_id} {payload}")),
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let logger = Arc::try_unwrap(logger)
        .ok()
        .expect("all writer threads finished");
    let out = String::from_utf8(logger.into_inner()).expect("log output is UTF-8");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(THREADS * CALLS_PER_THREAD, lines.len());
    for line in lines {
        let (tag, payload) = line
            .rsplit_once(' ')
            .expect("line ends with a payload token");
        let thread_id = tag
            .rsplit_once(" t")
            .map(|(_, id)| id)
            .expect("line carries its thread id");
        assert_eq!(thread_id.repeat(64), payload, "torn line: {line}");
    }
}

#[test]
fn disabled_debug_from_many_threads_writes_nothing() {
    let logger = Arc::new(LeveledLogger::new(Vec::new()));

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..CALLS_PER_THREAD {
                    logger.debug(false, "hidden");
                }
            });
        }
    });

    let logger = Arc::try_unwrap(logger)
        .ok()
        .expect("no other handles remain");
    assert!(logger.into_inner().is_empty());
}
