///
/// Applies `f` to all elements, in parallel if the feature `parallel` is enabled.
/// The results are returned in the order of the input.
///
#[stability::unstable(feature = "enable")]
#[cfg(feature = "parallel")]
pub fn potential_parallel_map<T, U, F>(data: Vec<T>, f: F) -> Vec<U>
    where F: Fn(T) -> U + Send + Sync,
        T: Send,
        U: Send
{
    <_ as rayon::iter::ParallelIterator>::collect(<_ as rayon::iter::ParallelIterator>::map(<_ as rayon::iter::IntoParallelIterator>::into_par_iter(data), f))
}

///
/// Applies `f` to all elements, in parallel if the feature `parallel` is enabled.
/// The results are returned in the order of the input.
///
#[stability::unstable(feature = "enable")]
#[cfg(not(feature = "parallel"))]
pub fn potential_parallel_map<T, U, F>(data: Vec<T>, f: F) -> Vec<U>
    where F: Fn(T) -> U + Send + Sync,
        T: Send,
        U: Send
{
    data.into_iter().map(f).collect()
}

///
/// Returns the length of the longest prefix of `data` whose elements all satisfy
/// `pred`.
///
/// If the feature `parallel` is enabled, `pred` is evaluated on all elements in
/// parallel; otherwise, the elements are checked in order, and the evaluation
/// stops at the first element that does not satisfy `pred`.
///
#[stability::unstable(feature = "enable")]
#[cfg(feature = "parallel")]
pub fn potential_parallel_prefix_len<T, F>(data: Vec<T>, pred: F) -> usize
    where F: Fn(T) -> bool + Send + Sync,
        T: Send
{
    let satisfied = potential_parallel_map(data, pred);
    satisfied.iter().position(|x| !*x).unwrap_or(satisfied.len())
}

///
/// Returns the length of the longest prefix of `data` whose elements all satisfy
/// `pred`.
///
/// If the feature `parallel` is enabled, `pred` is evaluated on all elements in
/// parallel; otherwise, the elements are checked in order, and the evaluation
/// stops at the first element that does not satisfy `pred`.
///
#[stability::unstable(feature = "enable")]
#[cfg(not(feature = "parallel"))]
pub fn potential_parallel_prefix_len<T, F>(data: Vec<T>, pred: F) -> usize
    where F: Fn(T) -> bool + Send + Sync,
        T: Send
{
    let mut result = 0;
    for x in data {
        if !pred(x) {
            break;
        }
        result += 1;
    }
    return result;
}

#[test]
fn test_potential_parallel_map() {
    assert_eq!(vec![1, 4, 9, 16], potential_parallel_map(vec![1, 2, 3, 4], |x| x * x));
    assert_eq!(Vec::<i32>::new(), potential_parallel_map(Vec::<i32>::new(), |x| x * x));
}

#[test]
fn test_potential_parallel_prefix_len() {
    assert_eq!(3, potential_parallel_prefix_len(vec![1, 2, 3, 10, 4], |x| x < 5));
    assert_eq!(5, potential_parallel_prefix_len(vec![1, 2, 3, 3, 4], |x| x < 5));
    assert_eq!(0, potential_parallel_prefix_len(vec![7, 2], |x| x < 5));
}
