use penumbra_core::StorageCapability;

/// A per-frame list of lights.
///
/// Growable and fixed lists expose the same interface: the resolve pass only
/// ever sees `active()`, the first `count()` entries, never the raw slots.
/// `count` only moves through `push` and `clear`, so it never exceeds the
/// fixed capacity.
#[derive(Clone, Debug)]
pub struct LightList<T> {
    slots: Slots<T>,
}

#[derive(Clone, Debug)]
enum Slots<T> {
    Growable(Vec<T>),
    Fixed { slots: Box<[T]>, count: usize },
}

impl<T: Copy + Default> LightList<T> {
    pub fn growable() -> Self {
        Self {
            slots: Slots::Growable(Vec::new()),
        }
    }

    pub fn fixed(capacity: usize) -> Self {
        Self {
            slots: Slots::Fixed {
                slots: vec![T::default(); capacity].into_boxed_slice(),
                count: 0,
            },
        }
    }

    pub fn for_capability(capability: StorageCapability) -> Self {
        match capability {
            StorageCapability::Growable => Self::growable(),
            StorageCapability::Fixed { capacity } => Self::fixed(capacity),
        }
    }

    /// Appends a light. Returns `false` when a fixed list is already full;
    /// the light is dropped and will not be iterated.
    pub fn push(&mut self, light: T) -> bool {
        match &mut self.slots {
            Slots::Growable(lights) => {
                lights.push(light);
                true
            }
            Slots::Fixed { slots, count } => {
                if *count >= slots.len() {
                    log::warn!(
                        "Light list full ({} slots), dropping {}",
                        slots.len(),
                        std::any::type_name::<T>()
                    );
                    return false;
                }
                slots[*count] = light;
                *count += 1;
                true
            }
        }
    }

    pub fn clear(&mut self) {
        match &mut self.slots {
            Slots::Growable(lights) => lights.clear(),
            Slots::Fixed { count, .. } => *count = 0,
        }
    }
}

impl<T> LightList<T> {
    pub fn active(&self) -> &[T] {
        match &self.slots {
            Slots::Growable(lights) => lights.as_slice(),
            Slots::Fixed { slots, count } => &slots[..*count],
        }
    }

    pub fn count(&self) -> usize {
        self.active().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `None` for growable lists.
    pub fn capacity(&self) -> Option<usize> {
        match &self.slots {
            Slots::Growable(_) => None,
            Slots::Fixed { slots, .. } => Some(slots.len()),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.active().iter()
    }
}

impl<T: bytemuck::Pod> LightList<T> {
    /// The active prefix as raw bytes, ready for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.active())
    }
}

impl<T: Copy + Default> Default for LightList<T> {
    fn default() -> Self {
        Self::growable()
    }
}

impl<T: Copy + Default> Extend<T> for LightList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for light in iter {
            if !self.push(light) {
                break;
            }
        }
    }
}

impl<T: Copy + Default> FromIterator<T> for LightList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: Slots::Growable(iter.into_iter().collect()),
        }
    }
}

impl<'a, T> IntoIterator for &'a LightList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
