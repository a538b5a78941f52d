//! Each thread has its own stack and its own sink.

use framewise::{InMemorySink, StackTrace, set_sink};
use std::sync::{Arc, Barrier};
use std::thread;

fn depth_while_other_thread_is_deep(barrier: Arc<Barrier>, frames: usize) -> Vec<&'static str> {
    fn recurse(remaining: usize, barrier: &Barrier) -> Vec<&'static str> {
        framewise::trace!();
        if remaining > 1 {
            return recurse(remaining - 1, barrier);
        }
        barrier.wait();
        let trace = StackTrace::capture();
        barrier.wait();
        trace.frames().iter().map(|l| l.function()).collect()
    }
    recurse(frames, &barrier)
}

#[test]
fn stacks_do_not_mix() {
    let barrier = Arc::new(Barrier::new(2));
    let shallow = {
        let barrier = barrier.clone();
        thread::spawn(move || depth_while_other_thread_is_deep(barrier, 2))
    };
    let deep = {
        let barrier = barrier.clone();
        thread::spawn(move || depth_while_other_thread_is_deep(barrier, 5))
    };
    assert_eq!(shallow.join().unwrap().len(), 2);
    assert_eq!(deep.join().unwrap().len(), 5);
    assert_eq!(framewise::stack::depth(), 0);
}

#[test]
fn sinks_do_not_mix() {
    let handles: Vec<_> = (0..4u32)
        .map(|n| {
            thread::spawn(move || {
                let sink = Arc::new(InMemorySink::new());
                set_sink(sink.clone());
                framewise::output!(n);
                (framewise::ThreadID::current(), sink.drain_lines())
            })
        })
        .collect();
    let mut ids = Vec::new();
    for (n, handle) in handles.into_iter().enumerate() {
        let (id, lines) = handle.join().unwrap();
        assert_eq!(lines, [format!("Thread({id}) n => {n}")]);
        ids.push(id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
