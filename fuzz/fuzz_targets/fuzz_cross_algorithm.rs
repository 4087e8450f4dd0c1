#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::{multiply_dc_with, multiply_strassen, Matrix, Options, WorkerPool};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks n in 1..=16 and the leaf size; small integer
    // elements keep every Strassen intermediate exact.
    let n = 1usize << (data[0] % 5);
    let leaf_size = 1usize << ((data[0] >> 4) % 3);
    let values: Vec<f64> = data[1..]
        .iter()
        .cycle()
        .take(2 * n * n)
        .map(|&b| f64::from(b as i8))
        .collect();

    let a = Matrix::from_elements(&values[..n * n]).unwrap();
    let b = Matrix::from_elements(&values[n * n..]).unwrap();
    let opts = Options::default().with_leaf_size(leaf_size);

    let schoolbook = a.matrix_product(&b).unwrap();
    let dc = multiply_dc_with(&a, &b, &opts).unwrap();
    let strassen = multiply_strassen(&a, &b, &opts, &WorkerPool::sequential()).unwrap();

    assert_eq!(schoolbook, dc, "Schoolbook != DivideConquer at n={n}");
    assert_eq!(schoolbook, strassen, "Schoolbook != Strassen at n={n}");
});
