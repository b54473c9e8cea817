use reified_optics::reified::ReifiedIndexedFold;

fn main() {
    let positions = ReifiedIndexedFold::from_fn(|numbers: &Vec<i32>| {
        numbers.iter().copied().enumerate().collect::<Vec<_>>()
    });

    let _ = positions.flat_map(|_| ReifiedIndexedFold::<usize, Vec<i32>, i32>::from_fn(|_| Vec::new()));
}
