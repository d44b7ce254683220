//! Tests for the primitive slice surfaces, codecs and numbers

use sugars_prims::bits;
use sugars_prims::codec::{self, Radix};
use sugars_prims::numbers::{self, Number};
use sugars_prims::prims::{booleans, bytes, chars, from_options_strict, sequence};
use sugars_prims::{
    arrays, classes, Error, NumericSliceExt, PrimSliceExt, RadixStringifier, ToStringStyle,
};

#[test]
fn test_float_slices_use_bit_equality() {
    let values = [0.0f64, -0.0, f64::NAN, 1.0, f64::NAN];
    assert_eq!(values.index_of(-0.0), Some(1));
    assert_eq!(values.last_index_of(f64::NAN), Some(4));
    assert_eq!(values.count_of(f64::NAN), 2);
    assert_eq!(values.distinct().len(), 4);
    assert!(values.contains_value(f64::from_bits(0x7ff8_0000_0000_00ff)));
    assert!(values.prim_eq(&[0.0, -0.0, f64::NAN, 1.0, f64::NAN]));
    assert!(!values.prim_eq(&[-0.0, 0.0, f64::NAN, 1.0, f64::NAN]));
}

#[test]
fn test_same_surface_for_every_primitive() {
    assert_eq!([true, false, true].index_of(false), Some(1));
    assert_eq!(['x', 'y'].joined("-"), "x-y");
    assert_eq!([1u64, 2, 3].reversed(), vec![3, 2, 1]);
    assert_eq!([5i16, 6, 7].sub_slice(1, 3), Ok(&[6i16, 7][..]));
    assert_eq!([5i16, 6, 7].clamped(2, 10), &[7i16]);
    assert_eq!([1u8, 2].padded_to(4, 0), vec![1, 2, 0, 0]);
    assert_eq!([1i32, 2].compare_to(&[1, 2, 0]), std::cmp::Ordering::Less);
    assert_eq!([1i8, 2].hash_code(), bits::hash_code(&[1i8, 2]));
}

#[test]
fn test_stringification_styles() {
    let style = ToStringStyle::default().with_separator(";");
    assert_eq!([10u8, 255].to_string_with(&style, &RadixStringifier(Radix::Hex)), "[0xa;0xff]");
    assert_eq!([1.5f32].to_string_styled(&ToStringStyle::plain()), "1.5");
}

#[test]
fn test_numeric_aggregates() {
    let v = sequence(1u16, 5);
    assert_eq!(v, vec![1, 2, 3, 4, 5]);
    assert_eq!(v.mean(), Ok(3.0));
    assert_eq!(v.max_value(), Ok(5));
    assert_eq!(v.cast_to::<f32>(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_strict_option_conversion() {
    let values = [Some(1i32), None, Some(3)];
    assert_eq!(from_options_strict(&values), Err(Error::MissingValue { index: 1 }));
    assert_eq!(from_options_strict(&[Some('a')]), Ok(vec!['a']));
}

#[test]
fn test_type_specific_modules() {
    assert_eq!(booleans::count_true(&[true, true, false]), 2);
    assert_eq!(bytes::to_i32s_be(&bytes::from_i32s_be(&[i32::MIN, 7])), Ok(vec![i32::MIN, 7]));
    assert_eq!(chars::from_code_points(&chars::to_code_points(&['é'])), Ok(vec!['é']));
    assert_eq!(bits::to_bit_string(bits::reverse_bits(0b0000_0011u8)), "11000000");
}

#[test]
fn test_codec_and_numbers_agree() {
    let text = codec::to_radix_string(-2i16, Radix::Hex);
    assert_eq!(text, "fffe");
    assert_eq!(codec::parse_radix::<i16>(&text, Radix::Hex), Ok(-2));
    assert_eq!(Number::parse("0xfffe"), Ok(Number::I32(0xfffe)));
    assert_eq!(numbers::compare(&Number::from(-2i16), &Number::from(0.5f64)), std::cmp::Ordering::Less);
}

#[test]
fn test_arrays_and_classes() {
    let mut v = [1, 2, 3, 4];
    arrays::shift(&mut v, 1);
    assert_eq!(v, [4, 1, 2, 3]);
    assert_eq!(classes::simple_name::<Option<Vec<u8>>>(), "Option<Vec<u8>>");
    assert!(classes::is_primitive::<char>());
}

#[cfg(feature = "random")]
mod random_tests {
    use sugars_prims::prims::random;
    use sugars_prims::PrimSliceExt;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a: Vec<i64> = random::random_vec_with(&mut random::seeded_rng(7), 32);
        let b: Vec<i64> = random::random_vec_with(&mut random::seeded_rng(7), 32);
        assert!(a.prim_eq(&b));
    }

    #[test]
    fn test_range_generation() {
        let v = random::random_range_vec(100, 10u32, 20).expect("valid bounds");
        assert!(v.iter().all(|x| (10..20).contains(x)));
    }

    #[test]
    fn test_range_generation_with_extreme_float_bounds() {
        assert!(random::random_range_vec(3, f64::MIN, f64::MAX).is_err());
        assert!(random::random_range_vec(3, f64::NEG_INFINITY, 0.0).is_err());
        let v = random::random_range_vec(8, -1e300, 1e300).expect("finite span");
        assert!(v.iter().all(|x| (-1e300..1e300).contains(x)));
    }
}
