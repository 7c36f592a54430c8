use rand::RngCore;
use rand::seq::SliceRandom;

/// Shuffle `arr` and return at most `max_values` of its elements.
///
/// With `can_modify_incoming_array` the caller's slice is shuffled in place,
/// otherwise a copy is shuffled. Pass a seeded `rng` for reproducible
/// samples; `None` uses the thread-local generator.
pub fn subsample_array<T: Clone>(
    arr: &mut [T],
    max_values: usize,
    can_modify_incoming_array: bool,
    rng: Option<&mut dyn RngCore>,
) -> Vec<T> {
    if !can_modify_incoming_array {
        return subsample_slice(arr, max_values, rng);
    }

    let take = max_values.min(arr.len());
    shuffle(arr, rng);
    arr[..take].to_vec()
}

/// Random sample of at most `max_values` elements, leaving `arr` untouched
pub fn subsample_slice<T: Clone>(
    arr: &[T],
    max_values: usize,
    rng: Option<&mut dyn RngCore>,
) -> Vec<T> {
    let mut copy = arr.to_vec();
    shuffle(&mut copy, rng);
    copy.truncate(max_values);
    copy
}

fn shuffle<T>(items: &mut [T], rng: Option<&mut dyn RngCore>) {
    match rng {
        Some(rng) => items.shuffle(rng),
        None => items.shuffle(&mut rand::thread_rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_returns_bounded_subset() {
        let mut items: Vec<u32> = (0..10).collect();
        let sample = subsample_array(&mut items, 3, true, None);

        assert_eq!(sample.len(), 3);
        for value in &sample {
            assert!((0..10).contains(value));
        }
        let mut dedup = sample.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 3);
    }

    #[test]
    fn test_max_values_larger_than_input() {
        let mut items = vec!["a", "b"];
        let mut sample = subsample_array(&mut items, 10, false, None);
        sample.sort();
        assert_eq!(sample, vec!["a", "b"]);
    }

    #[test]
    fn test_keeps_input_when_not_allowed_to_modify() {
        let original: Vec<u32> = (0..50).collect();
        let mut items = original.clone();
        let mut rng = StdRng::seed_from_u64(7);

        let _ = subsample_array(&mut items, 5, false, Some(&mut rng));
        assert_eq!(items, original);
    }

    #[test]
    fn test_modifies_input_in_place_when_allowed() {
        let original: Vec<u32> = (0..50).collect();
        let mut items = original.clone();
        let mut rng = StdRng::seed_from_u64(7);

        let sample = subsample_array(&mut items, 5, true, Some(&mut rng));
        assert_ne!(items, original);
        assert_eq!(sample, items[..5].to_vec());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut first_items: Vec<u32> = (0..100).collect();
        let mut second_items = first_items.clone();

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = subsample_array(&mut first_items, 10, false, Some(&mut first_rng));
        let second = subsample_array(&mut second_items, 10, false, Some(&mut second_rng));
        assert_eq!(first, second);
    }

    #[test]
    fn test_slice_sample_matches_non_modifying_array_sample() {
        let items: Vec<u32> = (0..30).collect();
        let mut copy = items.clone();

        let from_slice = subsample_slice(&items, 4, Some(&mut StdRng::seed_from_u64(3)));
        let from_array = subsample_array(&mut copy, 4, false, Some(&mut StdRng::seed_from_u64(3)));
        assert_eq!(from_slice, from_array);
        assert_eq!(from_slice.len(), 4);
        assert!(subsample_slice::<u32>(&[], 4, None).is_empty());
    }

    #[test]
    fn test_keeps_duplicate_multiplicity() {
        let mut items = vec![1, 1, 2];
        let mut sample = subsample_array(&mut items, 3, false, None);
        sample.sort();
        assert_eq!(sample, vec![1, 1, 2]);
    }
}
