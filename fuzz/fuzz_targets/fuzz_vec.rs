#![no_main]

use libfuzzer_sys::fuzz_target;

use inline_vec::InlineVec;

fn test_from_slice<const N: usize>(data: &[u8]) {
    match InlineVec::<u8, N>::from_slice(data) {
        Ok(vec) => assert_eq!(vec.as_slice(), data),
        Err(_) => assert!(data.len() > N),
    }
}

/// Replays `data` as a list of operations on an `InlineVec` and a `Vec`
/// model, checking that both agree after every step.
fn test_ops<const N: usize>(data: &[u8]) {
    let mut vec: InlineVec<u8, N> = InlineVec::new();
    let mut model: Vec<u8> = Vec::new();

    for pair in data.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1]);
        let full = model.len() == N;
        match op % 6 {
            0 => {
                assert_eq!(vec.push(arg).is_err(), full);
                if !full {
                    model.push(arg);
                }
            }
            1 => {
                let index = usize::from(arg) % (model.len() + 1);
                assert_eq!(vec.insert(index, arg).is_err(), full);
                if !full {
                    model.insert(index, arg);
                }
            }
            2 => {
                if !model.is_empty() {
                    let index = usize::from(arg) % model.len();
                    assert_eq!(vec.remove(index), model.remove(index));
                }
            }
            3 => assert_eq!(vec.pop(), model.pop()),
            4 => {
                let index = usize::from(arg);
                assert_eq!(vec.at(index).ok(), model.get(index));
            }
            _ => {
                vec.clear();
                model.clear();
            }
        }
        assert_eq!(vec.as_slice(), model.as_slice());
    }
}

fuzz_target!(|data: &[u8]| {
    match data.len() {
        0 => (),
        len if len <= 16 => test_from_slice::<16>(data),
        len if len <= 64 => test_from_slice::<64>(data),
        len if len <= 256 => test_from_slice::<256>(data),
        _ => (),
    }
    test_ops::<1>(data);
    test_ops::<8>(data);
    test_ops::<32>(data);
});
