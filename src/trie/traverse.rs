use crate::trie::node::Node;

impl Node {
    /// Depth-first, parent before children. `path` holds the characters from
    /// the starting node's prefix down to the node being visited.
    pub(crate) fn traverse_prefix<F>(&self, path: &mut String, f: &mut F)
        where F: FnMut(&str, &Node) {
        let start = path.len();
        // (byte length of the parent's path, edge letter, node)
        let mut stack: Vec<(usize, Option<char>, &Node)> = vec![(start, None, self)];
        while let Some((parent_len, letter, node)) = stack.pop() {
            path.truncate(parent_len);
            if let Some(c) = letter {
                path.push(c);
            }
            f(path, node);
            let len = path.len();
            stack.extend(node.children().rev().map(|(c, child)| (len, Some(c), child)));
        }
        path.truncate(start);
    }
}
