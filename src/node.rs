use crate::item::BTreeItem;

/// A node in the tree. Every non-root node holds between `t - 1` and `2t - 1`
/// objects and, when internal, between `t` and `2t` children; the minimum degree
/// `t` is not stored here — it is threaded into every node-level operation as a
/// plain parameter, since (unlike the reference C implementation) nothing on this
/// type needs a back-reference to shared tree configuration beyond that one number.
pub(crate) struct Node<V> {
    pub(crate) objects: Vec<V>,
    pub(crate) children: Vec<Box<Node<V>>>,
    pub(crate) leaf: bool,
}

impl<V: BTreeItem> Node<V> {
    pub(crate) fn new_leaf() -> Self {
        Node {
            objects: Vec::new(),
            children: Vec::new(),
            leaf: true,
        }
    }

    pub(crate) fn new_internal() -> Self {
        Node {
            objects: Vec::new(),
            children: Vec::new(),
            leaf: false,
        }
    }

    /// Smallest index `i` with `key <= objects[i].key()` (or `objects.len()` if
    /// none), and whether `objects[i].key() == key` at that index.
    fn find_key(&self, key: &V::Key) -> (usize, bool) {
        let mut left = 0;
        let mut right = self.objects.len();

        while left < right {
            let mid = left + (right - left) / 2;
            match self.objects[mid].key().cmp(key) {
                std::cmp::Ordering::Equal => return (mid, true),
                std::cmp::Ordering::Less => left = mid + 1,
                std::cmp::Ordering::Greater => right = mid,
            }
        }
        (left, false)
    }

    pub(crate) fn search(&self, key: &V::Key) -> Option<&V> {
        let (idx, found) = self.find_key(key);
        if found {
            return Some(&self.objects[idx]);
        }
        if self.leaf {
            return None;
        }
        self.children[idx].search(key)
    }

    /// Visit every object in ascending key order.
    pub(crate) fn traverse(&self, visit: &mut impl FnMut(&V)) {
        for i in 0..self.objects.len() {
            if !self.leaf {
                self.children[i].traverse(visit);
            }
            visit(&self.objects[i]);
        }
        if !self.leaf {
            self.children[self.objects.len()].traverse(visit);
        }
    }

    /// Split the full child at `child_idx` (precondition: it holds `2t - 1`
    /// objects) into two half-full siblings, promoting the middle object into
    /// `self` at `child_idx`.
    pub(crate) fn split_child(&mut self, child_idx: usize, t: usize) {
        let child = &mut self.children[child_idx];

        let right_objects = child.objects.split_off(t);
        let middle = child.objects.pop().expect("full child missing middle object");

        let right_children = if child.leaf {
            Vec::new()
        } else {
            child.children.split_off(t)
        };

        let sibling = Node {
            objects: right_objects,
            children: right_children,
            leaf: child.leaf,
        };

        self.objects.insert(child_idx, middle);
        self.children.insert(child_idx + 1, Box::new(sibling));
    }

    /// Insert `object` into this subtree. Precondition: `self` is not full
    /// (`objects.len() < 2t - 1`); callers at the root are responsible for
    /// splitting a full root before calling this.
    pub(crate) fn insert_non_full(&mut self, object: V, t: usize) {
        let (idx, _) = self.find_key(object.key());

        if self.leaf {
            self.objects.insert(idx, object);
            return;
        }

        let mut target = idx;
        if self.children[target].objects.len() == 2 * t - 1 {
            self.split_child(target, t);
            if object.key() > self.objects[target].key() {
                target += 1;
            }
        }
        self.children[target].insert_non_full(object, t);
    }

    /// Bring `children[idx]` up to at least `t` objects by borrowing from a
    /// sibling, or merging with one, before a caller descends into it.
    fn fill(&mut self, idx: usize, t: usize) {
        if idx > 0 && self.children[idx - 1].objects.len() >= t {
            self.borrow_from_prev(idx);
        } else if idx < self.objects.len() && self.children[idx + 1].objects.len() >= t {
            self.borrow_from_next(idx);
        } else if idx < self.objects.len() {
            self.merge(idx);
        } else {
            self.merge(idx - 1);
        }
    }

    fn borrow_from_prev(&mut self, idx: usize) {
        let separator = self.objects.remove(idx - 1);
        let borrowed_child = if !self.children[idx - 1].leaf {
            self.children[idx - 1].children.pop()
        } else {
            None
        };
        let borrowed_object = self.children[idx - 1]
            .objects
            .pop()
            .expect("left sibling has no objects to lend");

        self.objects.insert(idx - 1, borrowed_object);

        let child = &mut self.children[idx];
        child.objects.insert(0, separator);
        if let Some(c) = borrowed_child {
            child.children.insert(0, c);
        }
    }

    fn borrow_from_next(&mut self, idx: usize) {
        let separator = self.objects.remove(idx);
        let borrowed_child = if !self.children[idx + 1].leaf {
            Some(self.children[idx + 1].children.remove(0))
        } else {
            None
        };
        let borrowed_object = self.children[idx + 1].objects.remove(0);

        self.objects.insert(idx, borrowed_object);

        let child = &mut self.children[idx];
        child.objects.push(separator);
        if let Some(c) = borrowed_child {
            child.children.push(c);
        }
    }

    /// Merge `children[idx]` and `children[idx + 1]` around `objects[idx]` into a
    /// single node at `idx`; both siblings must hold exactly `t - 1` objects.
    fn merge(&mut self, idx: usize) {
        let separator = self.objects.remove(idx);
        let mut right = self.children.remove(idx + 1);

        let left = &mut self.children[idx];
        left.objects.push(separator);
        left.objects.append(&mut right.objects);
        if !left.leaf {
            left.children.append(&mut right.children);
        }
        // `right` is dropped here; it held no objects of its own (they moved
        // into `left`), so nothing is evicted by this step.
    }

    /// Remove `key` from this subtree if present. Returns the removed object, or
    /// `None` if `key` was not present (a silent no-op, per the spec's
    /// `missing-on-delete` outcome).
    pub(crate) fn delete(&mut self, key: &V::Key, t: usize) -> Option<V> {
        let (idx, found) = self.find_key(key);

        if found {
            return Some(self.delete_found(idx, t));
        }

        if self.leaf {
            return None;
        }

        let last = idx == self.objects.len();
        if self.children[idx].objects.len() < t {
            self.fill(idx, t);
            let target = if last && idx > self.objects.len() {
                idx - 1
            } else {
                idx
            };
            return self.children[target].delete(key, t);
        }
        self.children[idx].delete(key, t)
    }

    /// Remove the object known to be at `objects[idx]` (`leaf`) or the separator
    /// known to be at `objects[idx]` (internal). Shared by `delete`'s direct hit
    /// and by the post-`merge` recursion in `delete_from_non_leaf`, where the
    /// separator's position after the merge is known structurally rather than by
    /// a fresh key search.
    fn delete_found(&mut self, idx: usize, t: usize) -> V {
        if self.leaf {
            self.objects.remove(idx)
        } else {
            self.delete_from_non_leaf(idx, t)
        }
    }

    fn delete_from_non_leaf(&mut self, idx: usize, t: usize) -> V {
        if self.children[idx].objects.len() >= t {
            let predecessor = self.children[idx].take_max(t);
            std::mem::replace(&mut self.objects[idx], predecessor)
        } else if self.children[idx + 1].objects.len() >= t {
            let successor = self.children[idx + 1].take_min(t);
            std::mem::replace(&mut self.objects[idx], successor)
        } else {
            // Both children hold exactly `t - 1` objects (the only way this arm
            // is reached). `merge` folds `objects[idx]` onto the end of the
            // left child's `t - 1` objects, so it lands at index `t - 1` of the
            // merged node — no new key search is needed to find it again.
            self.merge(idx);
            self.children[idx].delete_found(t - 1, t)
        }
    }

    fn take_max(&mut self, t: usize) -> V {
        if self.leaf {
            return self.objects.pop().expect("take_max on empty leaf");
        }
        let mut idx = self.children.len() - 1;
        if self.children[idx].objects.len() < t {
            self.fill(idx, t);
            idx = self.children.len() - 1;
        }
        self.children[idx].take_max(t)
    }

    fn take_min(&mut self, t: usize) -> V {
        if self.leaf {
            return self.objects.remove(0);
        }
        if self.children[0].objects.len() < t {
            self.fill(0, t);
        }
        self.children[0].take_min(t)
    }
}
