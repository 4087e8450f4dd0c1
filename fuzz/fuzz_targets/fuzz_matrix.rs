#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::Matrix;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let (coords, elements) = data.split_at(3);
    let values: Vec<f64> = elements.iter().map(|&b| f64::from(b)).collect();

    // Arbitrary lengths and block coordinates must produce errors, not panics.
    let Ok(m) = Matrix::from_elements(&values) else {
        return;
    };
    let (i, j, k) = (
        usize::from(coords[0] % 20),
        usize::from(coords[1] % 20),
        usize::from(coords[2] % 20),
    );
    let _ = m.get_element(i, j);
    if let Ok(block) = m.sub_matrix(i, j, k) {
        let mut copy = m.clone();
        copy.set_sub_matrix(i, j, &block).unwrap();
        assert_eq!(copy, m);
        let _ = block.matrix_product(&m);
    }
    let _ = m.plus(&m).and_then(|s| s.minus(&m));
});
