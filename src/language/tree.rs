//! An ordered tree whose nodes own their children outright

use super::queue::Queue;

/// What a walk should do after visiting a node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Visit {
    /// Carry on into this node's children.
    Descend,
    /// End the walk now.
    Stop,
}

/// Nesting depth is up to the input, so nothing here recurses: dropping,
/// cloning, and comparing trees all work from an explicit stack.
#[derive(Debug)]
pub struct Tree<T> {
    pub item: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    pub fn new(item: T) -> Tree<T> {
        Tree {
            item,
            children: Vec::new(),
        }
    }

    /// Append a new child holding the given item and return it.
    pub fn push(&mut self, item: T) -> &mut Tree<T> {
        self.children
            .push(Tree::new(item));
        let last = self
            .children
            .len()
            - 1;
        &mut self.children[last]
    }

    /// Walk the tree level by level. Every node at depth d is handed to the
    /// visitor before any node at depth d + 1. The root is at depth 0.
    pub fn iterate_breadth_first<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(usize, &'a Tree<T>) -> Visit,
    {
        // We process the front of the queue, but add children to the back.
        let mut queue = Queue::new();
        queue.enqueue((0, self));

        while let Some((depth, node)) = queue.dequeue() {
            match visit(depth, node) {
                Visit::Stop => return,
                Visit::Descend => queue.extend(
                    node.children
                        .iter()
                        .map(|child| (depth + 1, child)),
                ),
            }
        }
    }

    /// Walk down from this node through last children only, handing each to
    /// the visitor (which may modify it) for as long as it answers Descend.
    /// Earlier siblings are never visited, so the cost is the depth of the
    /// walk and not the size of the tree.
    pub fn iterate_last_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, &mut Tree<T>) -> Visit,
    {
        let mut node = self;
        let mut depth = 0;
        loop {
            if visit(depth, &mut *node) == Visit::Stop {
                return;
            }
            match node
                .children
                .last_mut()
            {
                Some(child) => node = child,
                None => return,
            }
            depth += 1;
        }
    }

    /// Number of nodes in this tree, including the root.
    pub fn count(&self) -> usize {
        let mut total = 0;
        self.iterate_breadth_first(|_, _| {
            total += 1;
            Visit::Descend
        });
        total
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach descendants onto the heap so each node drops childless.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        // Copies are built depth first: `built` holds the copy of each node
        // on `work`, and a copy is attached to its parent once all of its
        // own children are done.
        let mut work = vec![(self, 0)];
        let mut built = vec![Tree::new(
            self.item
                .clone(),
        )];

        while let Some(top) = work.last_mut() {
            let (node, next) = *top;
            match node
                .children
                .get(next)
            {
                Some(child) => {
                    top.1 += 1;
                    work.push((child, 0));
                    built.push(Tree::new(
                        child
                            .item
                            .clone(),
                    ));
                }
                None => {
                    work.pop();
                    if work.is_empty() {
                        break;
                    }
                    if let Some(done) = built.pop() {
                        if let Some(parent) = built.last_mut() {
                            parent
                                .children
                                .push(done);
                        }
                    }
                }
            }
        }

        built
            .pop()
            .unwrap_or_else(|| {
                Tree::new(
                    self.item
                        .clone(),
                )
            })
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.item != b.item
                || a.children
                    .len()
                    != b.children
                        .len()
            {
                return false;
            }
            pending.extend(
                a.children
                    .iter()
                    .zip(&b.children),
            );
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}
