use crate::archive::{group_by_day, DayGroup, WishStats};
use crate::clock::Clock;
use crate::slot::SlotStorage;
use crate::store_json::{Persisted, StoreError, SubscriptionId};
use crate::wish::{DraftError, Wish, WishDraft};

/// Slot key used by the wishing wall.
pub const DEFAULT_WISHES_KEY: &str = "gozlemevi-wishes";

/// The wall's wish collection, newest first, persisted in one slot.
#[derive(Debug)]
pub struct WishBook<S> {
    store: Persisted<Vec<Wish>, S>,
}

impl<S: SlotStorage> WishBook<S> {
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_WISHES_KEY)
    }

    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            store: Persisted::load(storage, key, Vec::new()),
        }
    }

    pub fn key(&self) -> &str {
        self.store.key()
    }

    pub fn wishes(&self) -> &[Wish] {
        self.store.get()
    }

    pub fn len(&self) -> usize {
        self.wishes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishes().is_empty()
    }

    /// Inserts `wish` ahead of every existing record. Existing records are
    /// left untouched even when their id matches.
    pub fn append(&mut self, wish: Wish) {
        self.store.update(|wishes| wishes.insert(0, wish));
    }

    /// Validates the draft and appends the resulting wish.
    pub fn submit(&mut self, draft: WishDraft, clock: &impl Clock) -> Result<Wish, DraftError> {
        let wish = Wish::from_draft(draft, clock)?;
        self.append(wish.clone());
        Ok(wish)
    }

    pub fn for_date(&self, date: &str) -> Vec<&Wish> {
        self.wishes().iter().filter(|wish| wish.date == date).collect()
    }

    pub fn today(&self, clock: &impl Clock) -> Vec<&Wish> {
        self.for_date(&clock.today())
    }

    pub fn stats(&self) -> WishStats {
        WishStats::from_wishes(self.wishes())
    }

    pub fn archive(&self) -> Vec<DayGroup<'_>> {
        group_by_day(self.wishes())
    }

    pub fn last_write_error(&self) -> Option<&StoreError> {
        self.store.last_write_error()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Vec<Wish>) + 'static) -> SubscriptionId {
        self.store.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}
