/// The capability a stored object must provide: an orderable key, and an optional
/// hook invoked exactly once when the object leaves the tree (by removal or by
/// [`Tree::clear`](crate::Tree::clear)/drop).
///
/// `compare_objects` and `compare_key_object` from the reference design are both
/// synthesized from `Key: Ord` composed with [`key`](BTreeItem::key) — there is
/// exactly one order in this port, derived once, so it cannot drift out of sync
/// with itself the way two independently-supplied comparator callbacks could.
pub trait BTreeItem {
    /// The orderable projection of this object.
    type Key: Ord;

    /// Borrow the key this object is stored and searched under.
    fn key(&self) -> &Self::Key;

    /// Called exactly once, just before this object is dropped, when it leaves the
    /// tree via removal, [`Tree::clear`](crate::Tree::clear), or the tree's own
    /// `Drop`. The default does nothing; override for resources that need explicit
    /// cleanup beyond what `Drop` on `Self` already does.
    fn on_evict(&mut self) {}
}
