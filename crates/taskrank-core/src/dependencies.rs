//! Circular dependency check for imported task lists.
//!
//! A task's id is its 1-based position in the list. Dependencies that point
//! outside the list are ignored. The check only guards input; scoring never
//! looks at the graph.

use crate::error::ValidationError;
use crate::task::Task;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Every cycle reachable by depth-first search, as lists of task ids.
///
/// A task that depends on itself is reported as a one-element cycle.
pub fn find_dependency_cycles(tasks: &[Task]) -> Vec<Vec<u32>> {
    let mut marks = vec![Mark::Unvisited; tasks.len()];
    let mut path = Vec::new();
    let mut cycles = Vec::new();

    for start in 0..tasks.len() {
        if marks[start] == Mark::Unvisited {
            visit(tasks, start, &mut marks, &mut path, &mut cycles);
        }
    }
    cycles
}

/// `Err` listing the cycles when any exist.
pub fn ensure_acyclic(tasks: &[Task]) -> Result<(), ValidationError> {
    let cycles = find_dependency_cycles(tasks);
    if cycles.is_empty() {
        Ok(())
    } else {
        tracing::debug!(cycles = cycles.len(), "dependency cycles found");
        Err(ValidationError::CircularDependencies { cycles })
    }
}

/// Depth-first walk from `root` on an explicit stack, so long chains cannot
/// exhaust the call stack. `path` mirrors the tasks currently marked `OnPath`.
fn visit(
    tasks: &[Task],
    root: usize,
    marks: &mut [Mark],
    path: &mut Vec<usize>,
    cycles: &mut Vec<Vec<u32>>,
) {
    let mut stack = vec![(root, tasks[root].dependencies.iter())];
    marks[root] = Mark::OnPath;
    path.push(root);

    while let Some((index, deps)) = stack.last_mut() {
        let index = *index;
        let Some(&dep) = deps.next() else {
            stack.pop();
            path.pop();
            marks[index] = Mark::Done;
            continue;
        };
        let Some(next) = (dep as usize).checked_sub(1).filter(|i| *i < tasks.len()) else {
            continue;
        };
        match marks[next] {
            Mark::Unvisited => {
                marks[next] = Mark::OnPath;
                path.push(next);
                stack.push((next, tasks[next].dependencies.iter()));
            }
            Mark::OnPath => {
                if let Some(start) = path.iter().position(|&i| i == next) {
                    cycles.push(path[start..].iter().map(|&i| i as u32 + 1).collect());
                }
            }
            Mark::Done => {}
        }
    }
}
