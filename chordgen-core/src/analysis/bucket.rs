//! Bucket queue keyed by labelled-neighbour count.
//!
//! Bucket `k` holds the unlabelled nodes that currently have `k` labelled
//! neighbours, as an intrusive doubly-linked list threaded through per-node
//! `next`/`prev` arrays. Nodes enter at the tail and leave from the head, so
//! ties are broken by insertion order. `top` tracks the highest non-empty
//! bucket.

const NIL: usize = usize::MAX;

#[derive(Debug)]
pub(super) struct BucketQueue {
    head: Vec<usize>,
    tail: Vec<usize>,
    next: Vec<usize>,
    prev: Vec<usize>,
    bucket_of: Vec<usize>,
    top: usize,
}

impl BucketQueue {
    /// Places every node of `[0, node_count)` in bucket zero, in id order.
    pub(super) fn new(node_count: usize) -> Self {
        let buckets = node_count.max(1);
        let mut queue = Self {
            head: vec![NIL; buckets],
            tail: vec![NIL; buckets],
            next: vec![NIL; node_count],
            prev: vec![NIL; node_count],
            bucket_of: vec![0; node_count],
            top: 0,
        };
        for node in 0..node_count {
            queue.push_back(0, node);
        }
        queue
    }

    /// Removes and returns the oldest node of the highest non-empty bucket.
    pub(super) fn pop_max(&mut self) -> Option<usize> {
        let node = self.head[self.top];
        if node == NIL {
            return None;
        }
        self.unlink(node);
        self.bucket_of[node] = NIL;
        while self.top > 0 && self.head[self.top] == NIL {
            self.top -= 1;
        }
        Some(node)
    }

    /// Moves a queued node one bucket up.
    pub(super) fn promote(&mut self, node: usize) {
        let bucket = self.bucket_of[node];
        debug_assert_ne!(bucket, NIL, "only queued nodes can be promoted");
        self.unlink(node);
        let raised = bucket + 1;
        self.push_back(raised, node);
        self.top = self.top.max(raised);
    }

    fn push_back(&mut self, bucket: usize, node: usize) {
        let last = self.tail[bucket];
        self.prev[node] = last;
        self.next[node] = NIL;
        if last == NIL {
            self.head[bucket] = node;
        } else {
            self.next[last] = node;
        }
        self.tail[bucket] = node;
        self.bucket_of[node] = bucket;
    }

    fn unlink(&mut self, node: usize) {
        let bucket = self.bucket_of[node];
        let (before, after) = (self.prev[node], self.next[node]);
        if before == NIL {
            self.head[bucket] = after;
        } else {
            self.next[before] = after;
        }
        if after == NIL {
            self.tail[bucket] = before;
        } else {
            self.prev[after] = before;
        }
        self.prev[node] = NIL;
        self.next[node] = NIL;
    }
}
