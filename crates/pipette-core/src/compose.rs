use crate::pipe::Pipe;

/// Lift a unary function to one that maps over a sequence and wraps the
/// collected results in a [`Pipe`].
///
/// Output order and length match the input. Since the lifted function
/// already returns a `Pipe`, chain it with [`Pipe::and_then`]:
///
/// ```
/// use pipette_core::compose::compose;
/// use pipette_core::pipe::Pipe;
///
/// let doubled = Pipe::new(vec![1, 2, 3])
///     .and_then(compose(|x: i32| x * 2))
///     .into_inner();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn compose<A, B, I, F>(f: F) -> impl Fn(I) -> Pipe<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: Fn(A) -> B,
{
    move |values: I| Pipe::new(values.into_iter().map(&f).collect())
}
