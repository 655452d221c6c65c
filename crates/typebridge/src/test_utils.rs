use typebridge_core::{TypeGraph, TypeId, TypeKind};

/// Graph with the types most tests need.
///
/// `User { Name: string }`, `Nested { Owner: User }` and a `Context`
/// interface on top of the builtins.
pub struct Fixture {
    pub graph: TypeGraph,
    pub string: TypeId,
    pub int: TypeId,
    pub bool: TypeId,
    pub user: TypeId,
    pub nested: TypeId,
    pub context: TypeId,
}

impl Fixture {
    pub fn new() -> Self {
        let mut graph = TypeGraph::new();
        let string = graph.builtin(TypeKind::String).unwrap();
        let int = graph.builtin(TypeKind::Int).unwrap();
        let bool = graph.builtin(TypeKind::Bool).unwrap();
        let user = graph.structure("User", [("Name", string)]);
        let nested = graph.structure("Nested", [("Owner", user)]);
        let context = graph.interface("Context", false);
        Self {
            graph,
            string,
            int,
            bool,
            user,
            nested,
            context,
        }
    }

    pub fn scalar(&self, kind: TypeKind) -> TypeId {
        self.graph.builtin(kind).unwrap()
    }

    pub fn error(&self) -> TypeId {
        self.graph.error()
    }

    pub fn any(&self) -> TypeId {
        self.graph.any()
    }
}
