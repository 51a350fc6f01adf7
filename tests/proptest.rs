use linked_deque::{Deque, Error};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::collections::VecDeque;

proptest! {
    #[test]
    fn random_interleaved_add_and_remove(
        action in proptest::collection::vec(any::<usize>(), 0..128)
    ){
        let mut d: Deque<usize> = Deque::new();
        let mut model: VecDeque<usize> = VecDeque::new();

        for a in action {
            match a & 0x03 {
                0x00 => {
                    d.add_first(Some(a)).unwrap();
                    model.push_front(a);
                },
                0x01 => {
                    d.add_last(Some(a)).unwrap();
                    model.push_back(a);
                },
                0x02 => {
                    prop_assert_eq!(model.pop_front().ok_or(Error::EmptyCollection), d.remove_first());
                },
                0x03 => {
                    prop_assert_eq!(model.pop_back().ok_or(Error::EmptyCollection), d.remove_last());
                },
                _ => unreachable!(),
            }

            prop_assert_eq!(model.len(), d.len());
            prop_assert_eq!(model.is_empty(), d.is_empty());
        }

        prop_assert!(model.iter().eq(d.iter()));
    }
}

proptest! {
    #[test]
    fn back_then_front_is_fifo(items in proptest::collection::vec(any::<u32>(), 0..64)) {
        let mut d = Deque::new();
        for i in &items {
            d.add_last(Some(*i)).unwrap();
        }

        let mut out = Vec::new();
        while let Ok(i) = d.remove_first() {
            out.push(i);
        }

        prop_assert_eq!(items, out);
        prop_assert!(d.is_empty());
    }
}

proptest! {
    #[test]
    fn add_then_remove_at_same_end_is_identity(
        items in proptest::collection::vec(any::<u8>(), 0..32),
        x in any::<u8>(),
    ) {
        let mut d: Deque<u8> = items.iter().cloned().collect();
        let before = d.clone();

        d.add_first(Some(x)).unwrap();
        prop_assert_eq!(Ok(x), d.remove_first());
        prop_assert_eq!(&before, &d);

        d.add_last(Some(x)).unwrap();
        prop_assert_eq!(Ok(x), d.remove_last());
        prop_assert_eq!(&before, &d);
    }
}

proptest! {
    #[test]
    fn rejected_operations_leave_size_alone(
        seed in any::<u64>(),
        len in 0usize..16,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut d: Deque<u64> = (0..len).map(|_| rng.gen()).collect();
        let before = d.clone();

        prop_assert_eq!(Err(Error::InvalidArgument), d.add_first(None));
        prop_assert_eq!(Err(Error::InvalidArgument), d.add_last(None));
        prop_assert_eq!(&before, &d);

        d.clear();
        prop_assert_eq!(Err(Error::EmptyCollection), d.remove_first());
        prop_assert_eq!(Err(Error::EmptyCollection), d.remove_last());
        prop_assert_eq!(0, d.len());
    }
}

proptest! {
    #[test]
    fn iterators_are_independent(
        items in proptest::collection::vec(any::<i16>(), 0..32),
        skip in 0usize..32,
    ) {
        let d: Deque<i16> = items.iter().cloned().collect();

        let mut a = d.iter();
        let b = d.iter();

        for _ in 0..skip {
            a.next();
        }

        let expected: Vec<&i16> = items.iter().collect();
        prop_assert_eq!(&expected, &b.collect::<Vec<&i16>>());
        prop_assert_eq!(
            expected.iter().skip(skip).cloned().collect::<Vec<&i16>>(),
            a.collect::<Vec<&i16>>()
        );
    }
}
