use crate::content::{CategoryNode, ContentData, PageNode, extract_all_pages};

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(pages: &[&PageNode]) -> Vec<String> {
        pages
            .iter()
            .map(|p| p.href.clone().unwrap_or_default())
            .collect()
    }

    fn pages(paths: &[&str]) -> Option<Vec<PageNode>> {
        Some(paths.iter().map(|p| PageNode::new(p)).collect())
    }

    #[test]
    fn test_absent_input_is_empty() {
        assert!(extract_all_pages(None).is_empty());
        assert!(extract_all_pages(Some(&[][..])).is_empty());
        assert!(ContentData::default().pages().is_empty());
    }

    #[test]
    fn test_empty_nodes_yield_nothing() {
        let nodes = vec![CategoryNode::default(), CategoryNode::default()];
        assert!(extract_all_pages(Some(nodes.as_slice())).is_empty());
    }

    #[test]
    fn test_leaf_aliases_in_priority_order() {
        // Declared out of order on purpose: field priority decides, not layout
        let node = CategoryNode {
            entries: pages(&["/e"]),
            items: pages(&["/i1", "/i2"]),
            pages: pages(&["/p"]),
            ..CategoryNode::default()
        };

        let result = extract_all_pages(Some(std::slice::from_ref(&node)));
        assert_eq!(hrefs(&result), vec!["/p", "/i1", "/i2", "/e"]);
    }

    #[test]
    fn test_leaves_come_before_nested_containers() {
        let node = CategoryNode {
            sections: Some(vec![CategoryNode {
                pages: pages(&["/s"]),
                ..CategoryNode::default()
            }]),
            children: Some(vec![CategoryNode {
                items: pages(&["/c"]),
                ..CategoryNode::default()
            }]),
            entries: pages(&["/own"]),
            ..CategoryNode::default()
        };

        let result = extract_all_pages(Some(std::slice::from_ref(&node)));
        assert_eq!(hrefs(&result), vec!["/own", "/c", "/s"]);
    }

    #[test]
    fn test_depth_first_left_to_right() {
        let tree = vec![
            CategoryNode {
                pages: pages(&["/a"]),
                children: Some(vec![
                    CategoryNode {
                        pages: pages(&["/a/1"]),
                        sections: Some(vec![CategoryNode {
                            entries: pages(&["/a/1/x"]),
                            ..CategoryNode::default()
                        }]),
                        ..CategoryNode::default()
                    },
                    CategoryNode {
                        pages: pages(&["/a/2"]),
                        ..CategoryNode::default()
                    },
                ]),
                sections: Some(vec![CategoryNode {
                    items: pages(&["/a/s"]),
                    ..CategoryNode::default()
                }]),
                ..CategoryNode::default()
            },
            CategoryNode {
                pages: pages(&["/b"]),
                ..CategoryNode::default()
            },
        ];

        let result = extract_all_pages(Some(tree.as_slice()));
        assert_eq!(
            hrefs(&result),
            vec!["/a", "/a/1", "/a/1/x", "/a/2", "/a/s", "/b"]
        );
    }

    #[test]
    fn test_count_matches_all_leaf_entries() {
        fn count(nodes: &[CategoryNode]) -> usize {
            nodes
                .iter()
                .map(|n| {
                    n.pages.as_ref().map_or(0, Vec::len)
                        + n.items.as_ref().map_or(0, Vec::len)
                        + n.entries.as_ref().map_or(0, Vec::len)
                        + n.children.as_deref().map_or(0, count)
                        + n.sections.as_deref().map_or(0, count)
                })
                .sum()
        }

        let leaf = CategoryNode {
            pages: pages(&["/x", "/x"]),
            items: pages(&["/y"]),
            ..CategoryNode::default()
        };
        let tree = vec![
            CategoryNode {
                entries: pages(&["/z"]),
                children: Some(vec![leaf.clone(), leaf.clone()]),
                sections: Some(vec![leaf.clone()]),
                ..CategoryNode::default()
            },
            leaf,
        ];

        // Duplicate hrefs are kept: the flattener never dedupes
        assert_eq!(extract_all_pages(Some(tree.as_slice())).len(), count(&tree));
        assert_eq!(count(&tree), 13);
    }

    #[test]
    fn test_very_deep_tree() {
        let mut node = CategoryNode {
            pages: pages(&["/deepest"]),
            ..CategoryNode::default()
        };
        for _ in 0..10_000 {
            node = CategoryNode {
                children: Some(vec![node]),
                ..CategoryNode::default()
            };
        }

        // Owned by ContentData so the tree is also dropped without recursion
        let content = ContentData {
            categories: Some(vec![node]),
        };
        assert_eq!(hrefs(&content.pages()), vec!["/deepest"]);
    }
}
