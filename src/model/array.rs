// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Allowed array lengths for the sorting page.
pub const ELEMENT_COUNTS: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_ELEMENT_COUNT: usize = 30;
pub const MIN_VALUE: u32 = 10;
/// Exclusive upper bound for generated values.
pub const MAX_VALUE: u32 = 310;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementStatus {
    #[default]
    Default,
    Comparing,
    Swap,
    PotentialSwap,
    Sorted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayElement {
    pub value: u32,
    pub status: ElementStatus,
}

impl ArrayElement {
    pub fn new(value: u32) -> Self {
        Self { value, status: ElementStatus::Default }
    }
}

/// The render-facing array. Algorithms never read ordering decisions from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortArray {
    elements: Vec<ArrayElement>,
}

impl SortArray {
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        Self { elements: values.into_iter().map(ArrayElement::new).collect() }
    }

    pub fn random(len: usize, rng: &mut impl Rng) -> Self {
        Self::from_values((0..len).map(|_| rng.gen_range(MIN_VALUE..MAX_VALUE)))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[ArrayElement] {
        &self.elements
    }

    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|element| element.value).collect()
    }

    pub fn get(&self, index: usize) -> Option<&ArrayElement> {
        self.elements.get(index)
    }

    /// Sets one slot's status and optionally its value. Out-of-range indices are ignored.
    pub fn update(&mut self, index: usize, status: ElementStatus, value: Option<u32>) {
        if let Some(element) = self.elements.get_mut(index) {
            element.status = status;
            if let Some(value) = value {
                element.value = value;
            }
        }
    }

    /// Swaps the values of two slots; statuses stay in place.
    pub fn swap_values(&mut self, i: usize, j: usize) {
        if i >= self.len() || j >= self.len() || i == j {
            return;
        }
        let tmp = self.elements[i].value;
        self.elements[i].value = self.elements[j].value;
        self.elements[j].value = tmp;
    }

    pub fn reset_statuses(&mut self) {
        for element in &mut self.elements {
            element.status = ElementStatus::Default;
        }
    }

    pub fn max_value(&self) -> u32 {
        self.elements.iter().map(|element| element.value).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{ElementStatus, SortArray, MAX_VALUE, MIN_VALUE};

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let array = SortArray::random(50, &mut rng);
        assert_eq!(array.len(), 50);
        assert!(array.values().iter().all(|v| (MIN_VALUE..MAX_VALUE).contains(v)));
        assert!(array.elements().iter().all(|e| e.status == ElementStatus::Default));
    }

    #[test]
    fn update_sets_status_and_optional_value() {
        let mut array = SortArray::from_values([4, 2]);
        array.update(0, ElementStatus::Comparing, None);
        array.update(1, ElementStatus::Swap, Some(9));
        array.update(5, ElementStatus::Sorted, Some(1));
        assert_eq!(array.get(0).map(|e| (e.value, e.status)), Some((4, ElementStatus::Comparing)));
        assert_eq!(array.get(1).map(|e| (e.value, e.status)), Some((9, ElementStatus::Swap)));
    }

    #[test]
    fn swap_values_leaves_statuses() {
        let mut array = SortArray::from_values([1, 2, 3]);
        array.update(0, ElementStatus::Sorted, None);
        array.swap_values(0, 2);
        assert_eq!(array.values(), vec![3, 2, 1]);
        assert_eq!(array.get(0).map(|e| e.status), Some(ElementStatus::Sorted));
        array.reset_statuses();
        assert!(array.elements().iter().all(|e| e.status == ElementStatus::Default));
    }
}
