// Naive double recursion, O(φⁿ). The exponential cost is the workload.
pub fn fib(n: u64) -> u64 {
    if n <= 1 { return n; }
    fib(n - 2) + fib(n - 1)
}

// Number of invocations `fib(n)` makes, root call included:
// calls(0) = calls(1) = 1, calls(n) = calls(n - 2) + calls(n - 1) + 1
pub fn call_count(n: u64) -> u64 {
    let (mut prev, mut cur) = (1, 1);
    for _ in 1..n {
        let next = prev + cur + 1;
        prev = cur;
        cur = next;
    }
    cur
}
