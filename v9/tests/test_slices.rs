use v9::{
    slices::{Slice, SliceSet, Slices},
    Axis, Error, AABB,
};

#[test]
fn empty_slice() {
    let slice = Slice::new(0.0f32, 0.0).unwrap();
    assert_eq!(slice.size(), 0.0);
    assert!(slice.is_empty());
}

#[test]
fn start_must_be_less_than_end() {
    assert_eq!(
        Slice::new(2.0f32, 1.0),
        Err(Error::InvalidSlice {
            start: 2.0,
            end: 1.0
        })
    );
    assert!(Slice::try_from((f64::NAN, 1.0)).is_err());
}

#[test]
fn slices_from_int_rect() {
    let slices = Slices::<f32>::from_rect(0, 0, 4, 4).unwrap();
    assert_eq!(slices.vertical().len(), 1);
    assert_eq!(slices.vertical()[0], Slice::new(0.0, 4.0).unwrap());
    assert_eq!(slices.horizontal().len(), 1);
    assert_eq!(slices.horizontal()[0], Slice::new(0.0, 4.0).unwrap());
}

#[test]
fn slices_from_float_rect() {
    let slices = Slices::<f32>::from_rect(0.0, 0.0, 4.0, 4.0).unwrap();
    assert_eq!(slices.vertical().len(), 1);
    assert_eq!(slices.vertical()[0], Slice::new(0.0, 4.0).unwrap());
    assert_eq!(slices.horizontal().len(), 1);
    assert_eq!(slices.horizontal()[0], Slice::new(0.0, 4.0).unwrap());

    let from_aabb = Slices::from_aabb(&AABB::new(0.0f32, 0.0, 4.0, 4.0)).unwrap();
    assert_eq!(from_aabb, slices);
}

#[test]
fn slices_from_rect_uses_left_right_for_vertical() {
    let slices = Slices::<f64>::from_rect(9, 7, 15, 13).unwrap();
    assert_eq!(slices.vertical()[0], Slice::new(9.0, 15.0).unwrap());
    assert_eq!(slices.horizontal()[0], Slice::new(7.0, 13.0).unwrap());
    assert_eq!(slices.get(Axis::Vertical).axis(), Axis::Vertical);
    assert_eq!(slices.get(Axis::Horizontal).axis(), Axis::Horizontal);
}

#[test]
fn empty_vertical_slices() {
    let result = Slices::new(vec![], vec![Slice::new(0.0f32, 1.0).unwrap()]);
    assert_eq!(
        result,
        Err(Error::EmptySliceList {
            axis: Axis::Vertical
        })
    );
}

#[test]
fn empty_horizontal_slices() {
    let result = Slices::new(vec![Slice::new(0.0f32, 1.0).unwrap()], vec![]);
    assert_eq!(
        result,
        Err(Error::EmptySliceList {
            axis: Axis::Horizontal
        })
    );
}

#[test]
fn slices() {
    let slices = Slices::new(
        vec![
            Slice::new(0.0f32, 1.0).unwrap(),
            Slice::new(2.0, 3.0).unwrap(),
        ],
        vec![
            Slice::new(0.0f32, 1.0).unwrap(),
            Slice::new(2.0, 3.0).unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(slices.vertical().len(), 2);
    assert_eq!(slices.horizontal().len(), 2);
    assert_eq!(slices.vertical().total_stretchable(), 2.0);
}

#[test]
fn filter_empty_slices() {
    let slices = Slices::new(
        vec![
            Slice::new(0.0f32, 0.0).unwrap(),
            Slice::new(2.0, 3.0).unwrap(),
        ],
        vec![
            Slice::new(0.0f32, 0.0).unwrap(),
            Slice::new(2.0, 3.0).unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(slices.vertical().len(), 1);
    assert_eq!(slices.horizontal().len(), 1);
}

#[test]
fn only_empty_slices_is_accepted() {
    let set = SliceSet::new(Axis::Vertical, vec![Slice::new(5.0, 5.0).unwrap()]).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.total_stretchable(), 0.0);
    assert_eq!(set.stretch_factor(10.0, 20.0), 0.0);
    assert_eq!(set.displacement(100.0, 0.0), 0.0);
}

#[test]
fn slices_sorted_by_start() {
    let set = SliceSet::new(
        Axis::Horizontal,
        vec![
            Slice::new(18.0, 19.0).unwrap(),
            Slice::new(5.0, 6.0).unwrap(),
        ],
    )
    .unwrap();
    let starts: Vec<f64> = set.iter().map(|s| s.start()).collect();
    assert_eq!(starts, vec![5.0, 18.0]);
}

#[test]
fn displacement_accumulates_across_slices() {
    let set = SliceSet::new(
        Axis::Vertical,
        vec![
            Slice::new(9.0, 10.0).unwrap(),
            Slice::new(14.0, 15.0).unwrap(),
        ],
    )
    .unwrap();
    let stretch = set.stretch_factor(18.0, 30.0);
    assert_eq!(stretch, 6.0);
    assert_eq!(set.displacement(9.0, stretch), 0.0);
    assert_eq!(set.displacement(9.5, stretch), 3.0);
    assert_eq!(set.displacement(12.0, stretch), 6.0);
    assert_eq!(set.displacement(14.5, stretch), 9.0);
    assert_eq!(set.displacement(21.0, stretch), 12.0);
    assert_eq!(set.offset(21.0, stretch), 33.0);
}

#[test]
fn display() {
    let slices = Slices::<f64>::from_rect(9, 7, 15, 13).unwrap();
    assert_eq!(
        slices.to_string(),
        "Slices(verticalSlices=[Slice(start=9, end=15)], horizontalSlices=[Slice(start=7, end=13)])"
    );
}

#[test]
fn error_messages() {
    let err = Slice::new(2.0, 1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid slice, start must be <= end: start = 2, end = 1"
    );
    let err = Slices::<f64>::new(vec![], vec![]).unwrap_err();
    assert_eq!(err.to_string(), "at least 1 vertical slice is required");
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn slices_json() {
        let slices = Slices::<f64>::from_rect(9, 7, 15, 13).unwrap();
        let json = serde_json::to_string(&slices).unwrap();
        assert_eq!(
            json,
            r#"{"verticalSlices":[{"start":9.0,"end":15.0}],"horizontalSlices":[{"start":7.0,"end":13.0}]}"#
        );
        let back: Slices<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slices);
    }

    #[test]
    fn invalid_json_slices_rejected() {
        let inverted = r#"{"start":3.0,"end":1.0}"#;
        assert!(serde_json::from_str::<Slice<f64>>(inverted).is_err());

        let empty = r#"{"verticalSlices":[],"horizontalSlices":[{"start":7.0,"end":13.0}]}"#;
        assert!(serde_json::from_str::<Slices<f64>>(empty).is_err());
    }
}
