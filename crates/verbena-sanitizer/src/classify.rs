use std::collections::HashSet;

use verbena_node_registry::NodeTypeRegistry;
use verbena_workflow::Node;

use crate::report::Reporter;

/// Compute the set of node names that cannot receive input.
///
/// A node lands in the set when its resolved descriptor declares zero
/// inputs, or when resolution fails. The failure branch is a deliberate
/// conservative policy: an unresolvable type is excluded as a target rather
/// than trusted, and the failure is reported exactly once per node.
pub fn classify(
  nodes: &[Node],
  registry: &dyn NodeTypeRegistry,
  reporter: &dyn Reporter,
) -> HashSet<String> {
  let mut unreceivable = HashSet::new();

  for node in nodes {
    match registry.get_by_name_and_version(&node.type_name, node.type_version) {
      Ok(descriptor) => {
        if !descriptor.accepts_input() {
          unreceivable.insert(node.name.clone());
        }
      }
      Err(error) => {
        // Unresolvable type: exclude the node as a target.
        reporter.report(&node.name, &error);
        unreceivable.insert(node.name.clone());
      }
    }
  }

  unreceivable
}
