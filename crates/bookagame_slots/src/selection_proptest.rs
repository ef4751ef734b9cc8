#[cfg(test)]
mod tests {
    use crate::selection::{SlotSelector, TapOutcome};
    use bookagame_common::models::{SlotStatus, TimeSlot};
    use bookagame_common::ClockTime;
    use proptest::prelude::*;

    // Hourly slots from 06:00 with the given statuses.
    fn build_slots(statuses: &[SlotStatus]) -> Vec<TimeSlot> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let start = ClockTime::new(6 + i as u32, 0).unwrap();
                TimeSlot {
                    start_time: start,
                    end_time: start.add_hours(1).unwrap(),
                    status: *status,
                    booking_id: None,
                }
            })
            .collect()
    }

    fn status_strategy() -> impl Strategy<Value = SlotStatus> {
        prop_oneof![
            6 => Just(SlotStatus::Available),
            1 => Just(SlotStatus::Booked),
            1 => Just(SlotStatus::Blocked),
        ]
    }

    fn selected_indices(selector: &SlotSelector) -> Vec<usize> {
        selector
            .selected_start_times()
            .iter()
            .map(|t| {
                selector
                    .slots()
                    .iter()
                    .position(|s| s.start_time == *t)
                    .expect("selected slot must exist")
            })
            .collect()
    }

    proptest! {
        // Any tap sequence keeps the selection one contiguous run within max
        #[test]
        fn test_selection_stays_contiguous_and_bounded(
            statuses in prop::collection::vec(status_strategy(), 1..16),
            taps in prop::collection::vec(0..16usize, 0..40),
            max_slots in 1..6usize,
        ) {
            let slots = build_slots(&statuses);
            let mut selector = SlotSelector::new(slots.clone(), max_slots);

            for tap in taps {
                let target = slots[tap % slots.len()].start_time;
                selector.tap(target);

                let indices = selected_indices(&selector);
                prop_assert!(indices.len() <= max_slots);
                for pair in indices.windows(2) {
                    prop_assert_eq!(pair[1], pair[0] + 1, "gap in selection {:?}", indices);
                }
                for i in &indices {
                    prop_assert!(selector.slots()[*i].is_available());
                }
                match selector.range() {
                    None => prop_assert!(indices.is_empty()),
                    Some(range) => {
                        prop_assert_eq!(range.start_time, slots[indices[0]].start_time);
                        prop_assert_eq!(range.end_time, slots[*indices.last().unwrap()].end_time);
                    }
                }
            }
        }

        // Booked and blocked slots never change the selection
        #[test]
        fn test_unavailable_taps_are_no_ops(
            statuses in prop::collection::vec(status_strategy(), 2..16),
            warmup in prop::collection::vec(0..16usize, 0..10),
        ) {
            let slots = build_slots(&statuses);
            let mut selector = SlotSelector::new(slots.clone(), 4);
            for tap in warmup {
                selector.tap(slots[tap % slots.len()].start_time);
            }

            for slot in slots.iter().filter(|s| !s.is_available()) {
                let before = selector.selected_start_times();
                let outcome = selector.tap(slot.start_time);
                prop_assert!(!outcome.changed());
                prop_assert_eq!(before, selector.selected_start_times());
            }
        }

        // From a single slot, an available neighbour extends the run
        #[test]
        fn test_adjacent_tap_builds_two_run(len in 2..16usize, pick in 0..16usize, up in any::<bool>()) {
            let slots = build_slots(&vec![SlotStatus::Available; len]);
            let first = pick % len;
            let neighbour = if (up && first + 1 < len) || first == 0 { first + 1 } else { first - 1 };

            let mut selector = SlotSelector::new(slots.clone(), 4);
            selector.tap(slots[first].start_time);
            prop_assert_eq!(selector.tap(slots[neighbour].start_time), TapOutcome::Added);

            let indices = selected_indices(&selector);
            prop_assert_eq!(indices, vec![first.min(neighbour), first.max(neighbour)]);
        }

        // A tap away from the run replaces it with that single slot
        #[test]
        fn test_far_tap_yields_singleton(len in 4..16usize, start in 0..16usize, run in 1..4usize, offset in 2..12usize) {
            let slots = build_slots(&vec![SlotStatus::Available; len]);
            let start = start % (len - run + 1);
            let mut selector = SlotSelector::new(slots.clone(), 4);
            for i in start..start + run {
                selector.tap(slots[i].start_time);
            }

            let last = start + run - 1;
            let far = if last + offset < len {
                last + offset
            } else if start >= offset {
                start - offset
            } else {
                return Ok(());
            };

            prop_assert_eq!(selector.tap(slots[far].start_time), TapOutcome::Restarted);
            prop_assert_eq!(selector.selected_start_times(), vec![slots[far].start_time]);
        }
    }
}
