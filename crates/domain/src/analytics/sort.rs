// domain analytics sorting utilities

/// A contiguous run of values waiting on the work stack.
#[derive(Debug)]
enum Pending<T> {
    /// Still needs partitioning.
    Unsorted(Vec<T>),
    /// Already in final order; emitted as-is.
    Settled(Vec<T>),
}

/// Three-way quicksort, ascending.
///
/// The middle-index element is the pivot; every run is split into values
/// strictly less than, equal to and strictly greater than it, and the result
/// is `less ++ equal ++ greater`. Sub-runs are tracked on an explicit stack
/// rather than by recursion, so inputs dominated by one pivot value cannot
/// exhaust the call stack.
///
/// Equal elements keep their relative input order. Values that compare
/// unordered against the pivot (NaN) are sent to the greater side and end up
/// trailing their run, in input order.
///
/// Average O(n log n), worst case O(n²).
pub fn quicksort<T>(values: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    let mut sorted = Vec::with_capacity(values.len());
    let mut stack = vec![Pending::Unsorted(values.to_vec())];

    while let Some(task) = stack.pop() {
        match task {
            Pending::Settled(run) => sorted.extend(run),
            Pending::Unsorted(run) if run.len() <= 1 => sorted.extend(run),
            Pending::Unsorted(run) => {
                let len = run.len();
                let (less, equal, greater) = partition(run);
                if greater.len() == len {
                    // the pivot is unordered even against itself
                    let (ordered, unordered): (Vec<T>, Vec<T>) =
                        greater.into_iter().partition(|v| v.partial_cmp(v).is_some());
                    stack.push(Pending::Settled(unordered));
                    stack.push(Pending::Unsorted(ordered));
                    continue;
                }
                // LIFO: `less` is popped first
                stack.push(Pending::Unsorted(greater));
                stack.push(Pending::Settled(equal));
                stack.push(Pending::Unsorted(less));
            }
        }
    }

    log::trace!("quicksort: ordered {} values", sorted.len());
    sorted
}

fn partition<T>(run: Vec<T>) -> (Vec<T>, Vec<T>, Vec<T>)
where
    T: PartialOrd + Clone,
{
    let pivot = run[run.len() / 2].clone();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for value in run {
        if value < pivot {
            less.push(value);
        } else if value == pivot {
            equal.push(value);
        } else {
            greater.push(value);
        }
    }

    (less, equal, greater)
}
