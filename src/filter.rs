use crate::policy::FilterSpec;
use ndarray::Array2;

/// Sentinel written for filtered-out or invalid pixels. Must lie outside
/// every registered filter's valid range.
pub const NO_DATA_VALUE: i16 = -999;

/// Narrow a raw source block to signed 16-bit samples.
///
/// The cast wraps for values outside ±32768, matching the behavior of the
/// original processing chain: narrowing happens before bounds-checking, so
/// wrapped values are filtered like any other sample.
pub fn narrow(block: Array2<i32>) -> Array2<i16> {
    block.mapv(|v| v as i16)
}

/// Replace every sample outside [spec.lower, spec.upper] with the no-data
/// sentinel. The buffer is owned and not reused by the caller, so the mask
/// is applied in place.
pub fn apply(mut block: Array2<i16>, spec: &FilterSpec) -> Array2<i16> {
    block.mapv_inplace(|v| if spec.contains(v) { v } else { NO_DATA_VALUE });
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn forcing() -> FilterSpec {
        FilterSpec::new("forcing", 0, 400).unwrap()
    }

    #[test]
    fn test_forcing_scenario() {
        let block = arr2(&[[-5i16, 0], [400, 401]]);
        let filtered = apply(block, &forcing());
        assert_eq!(filtered, arr2(&[[NO_DATA_VALUE, 0], [400, NO_DATA_VALUE]]));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let spec = FilterSpec::new("fraction", 15, 100).unwrap();
        let block = arr2(&[[14i16, 15], [100, 101]]);
        let filtered = apply(block, &spec);
        assert_eq!(
            filtered,
            arr2(&[[NO_DATA_VALUE, 15], [100, NO_DATA_VALUE]])
        );
    }

    #[test]
    fn test_in_range_values_unchanged() {
        let block = arr2(&[[0i16, 1, 200], [399, 400, 50]]);
        let filtered = apply(block.clone(), &forcing());
        assert_eq!(filtered, block);
    }

    #[test]
    fn test_narrow_wraps_out_of_range_samples() {
        // 40000 wraps to -25536, 65536 wraps to 0
        let raw = arr2(&[[40000i32, 65536], [-40000, 120]]);
        let narrowed = narrow(raw);
        assert_eq!(narrowed, arr2(&[[-25536i16, 0], [25536, 120]]));

        // The wrapped zero now passes the forcing filter even though the
        // source sample was far out of range.
        let filtered = apply(narrowed, &forcing());
        assert_eq!(
            filtered,
            arr2(&[[NO_DATA_VALUE, 0], [NO_DATA_VALUE, 120]])
        );
    }
}
