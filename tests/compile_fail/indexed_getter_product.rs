use reified_optics::reified::ReifiedIndexedGetter;

fn main() {
    let first = ReifiedIndexedGetter::from_fn(|pair: &(i32, i32)| (0_usize, pair.0));
    let second = ReifiedIndexedGetter::from_fn(|pair: &(i32, i32)| (1_usize, pair.1));

    let _ = first.product(second);
}
