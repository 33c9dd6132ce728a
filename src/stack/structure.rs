
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::Empty)
  }

  /// Returns the top of the stack without removing it.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.elements.last().ok_or(StackError::Empty)
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Iterates from the bottom of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
    self.elements.iter()
  }

}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fresh_stack_is_empty() {
    let mut stack = Stack::<f64>::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(StackError::Empty));
    assert_eq!(stack.peek(), Err(StackError::Empty));
  }

  #[test]
  fn test_top_is_last_pushed() {
    let mut stack = Stack::new();
    stack.push(2.0);
    stack.push(5.0);
    stack.push(9.0);
    assert_eq!(stack, Stack::from(vec![2.0, 5.0, 9.0]));
    assert_eq!(stack.peek(), Ok(&9.0));
    assert_eq!(stack.pop(), Ok(9.0));
    assert_eq!(stack.pop(), Ok(5.0));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Ok(2.0));
    assert_eq!(stack.pop(), Err(StackError::Empty));
  }

  #[test]
  fn test_peek_does_not_remove() {
    let stack = Stack::from(vec!["bottom", "top"]);
    assert_eq!(stack.peek(), Ok(&"top"));
    assert_eq!(stack.peek(), Ok(&"top"));
    assert_eq!(stack.len(), 2);
  }

  #[test]
  fn test_check_stack_size() {
    let stack = Stack::from(vec![1.5, -1.5]);
    assert_eq!(stack.check_stack_size(0), Ok(()));
    assert_eq!(stack.check_stack_size(2), Ok(()));
    assert_eq!(stack.check_stack_size(3), Err(StackError::NotEnoughElements { expected: 3, actual: 2 }));
    assert_eq!(Stack::<f64>::new().check_stack_size(1), Err(StackError::NotEnoughElements { expected: 1, actual: 0 }));
  }

  #[test]
  fn test_iter_from_bottom() {
    let stack = Stack::from(vec![3.0, 4.0, 0.5]);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3.0, 4.0, 0.5]);
  }
}
