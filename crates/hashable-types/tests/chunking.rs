use hashable::{Hashable, hash_bytes_with_salt};
use hashable_types::{ByteString, ChunkedBytes, ChunkedText, Text};
use proptest::prelude::*;

// split `data` at the given cut points, which may repeat or be unsorted
fn cut<T: Clone>(data: &[T], cuts: &[prop::sample::Index]) -> Vec<Vec<T>> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
    points.push(0);
    points.push(data.len());
    points.sort_unstable();

    points.windows(2).map(|w| data[w[0]..w[1]].to_vec()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_chunked_bytes_ignore_boundaries(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..6),
        salt in any::<isize>(),
    ) {
        let chunked: ChunkedBytes = cut(&data, &cuts).into_iter().map(ByteString::from).collect();
        let whole = ByteString::from(data.clone());

        prop_assert_eq!(chunked.clone(), ChunkedBytes::from(whole.clone()));
        prop_assert_eq!(chunked.hash_with_salt(salt), whole.hash_with_salt(salt));
        prop_assert_eq!(chunked.hash(), hash_bytes_with_salt(&data, hashable::STRING_SALT));
    }

    #[test]
    fn prop_chunked_text_ignore_boundaries(
        s in "\\PC{0,40}",
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let whole = Text::from(s.as_str());
        let chunked: ChunkedText = cut(whole.units(), &cuts)
            .into_iter()
            .map(Text::from_units)
            .collect();

        prop_assert_eq!(&chunked.to_text(), &whole);
        prop_assert_eq!(chunked.hash(), whole.hash());
    }

    #[test]
    fn prop_views_hash_like_fresh_copies(
        s in "\\PC{0,40}",
        start in any::<prop::sample::Index>(),
        width in any::<prop::sample::Index>(),
    ) {
        let whole = Text::from(s.as_str());
        let a = start.index(whole.len() + 1);
        let b = a + width.index(whole.len() - a + 1);

        let view = whole.slice(a, b).unwrap();
        let copy = Text::from_units(view.units().to_vec());

        prop_assert!(view.shares_backing_with(&whole));
        prop_assert_eq!(view.hash(), copy.hash());
    }
}
