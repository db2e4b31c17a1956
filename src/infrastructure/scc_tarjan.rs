use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use std::cmp::min;

/// Tarjan's strongly connected components, driven by an explicit work stack so that long
/// chains never grow the call stack.
pub struct TarjanSccDetector;

impl SccDetector for TarjanSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        tarjan_scc(graph)
    }
}

const UNVISITED: usize = usize::MAX;

/// One suspended DFS call: the node being explored and the position of the next
/// neighbor to look at in its adjacency list.
struct Frame {
    node: usize,
    next: usize,
}

/// Everything a single computation mutates. Created per call, dropped at the end.
struct Tarjan<'g> {
    graph: &'g Graph,
    time: usize,
    discovery: Vec<usize>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    closed: Vec<Vec<usize>>,
}

fn tarjan_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();
    let mut state = Tarjan {
        graph,
        time: 0,
        discovery: vec![UNVISITED; n],
        low_link: vec![UNVISITED; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        closed: Vec::new(),
    };

    for root in 0..n {
        if state.discovery[root] == UNVISITED {
            state.strong_connect(root);
        }
    }

    SccResult::from_closed_components(graph, state.closed)
}

impl Tarjan<'_> {
    fn discover(&mut self, v: usize) {
        self.discovery[v] = self.time;
        self.low_link[v] = self.time;
        self.time += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    fn strong_connect(&mut self, root: usize) {
        let graph = self.graph;
        let mut work = vec![Frame { node: root, next: 0 }];
        self.discover(root);

        while let Some(frame) = work.last_mut() {
            let v = frame.node;

            if let Some(&w) = graph.neighbors(v).get(frame.next) {
                frame.next += 1;
                if self.discovery[w] == UNVISITED {
                    // Tree edge: suspend v, explore w first.
                    self.discover(w);
                    work.push(Frame { node: w, next: 0 });
                } else if self.on_stack[w] {
                    self.low_link[v] = min(self.low_link[v], self.discovery[w]);
                }
                // Otherwise w sits in an already closed component.
                continue;
            }

            // All neighbors of v handled: this is the return from the recursive call.
            work.pop();
            if self.low_link[v] == self.discovery[v] {
                self.close_component(v);
            }
            if let Some(parent) = work.last() {
                let p = parent.node;
                self.low_link[p] = min(self.low_link[p], self.low_link[v]);
            }
        }
    }

    fn close_component(&mut self, root: usize) {
        let mut members = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            members.push(w);
            if w == root {
                break;
            }
        }
        self.closed.push(members);
    }
}
