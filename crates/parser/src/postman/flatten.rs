//! Breadth-first flattening of the Postman item tree

use serde_json::{Map, Value};
use std::collections::VecDeque;

/// Iterator over every request-bearing node of an `item` tree
///
/// Folders are expanded with a FIFO worklist rather than recursion, so
/// arbitrarily deep nesting cannot overflow the stack. A node that carries a
/// `request` is yielded; its own `item` array, if any, is still traversed.
pub struct FlattenItems<'a> {
    queue: VecDeque<&'a Value>,
}

impl<'a> FlattenItems<'a> {
    pub fn new(items: &'a [Value]) -> Self {
        Self {
            queue: items.iter().collect(),
        }
    }
}

impl<'a> Iterator for FlattenItems<'a> {
    type Item = &'a Map<String, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.queue.pop_front() {
            let Value::Object(fields) = node else {
                continue;
            };

            if let Some(Value::Array(children)) = fields.get("item") {
                self.queue.extend(children);
            }

            if fields.contains_key("request") {
                return Some(fields);
            }
        }

        None
    }
}

/// Flatten a Postman `item` array into its request-bearing nodes
pub fn flatten_items(items: &[Value]) -> FlattenItems<'_> {
    FlattenItems::new(items)
}
