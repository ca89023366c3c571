//! AST data structures produced by the parser. Nodes borrow their names from the source text.

/// A type reference: a plain type name, an array `[T]`, a map `{K:V}` or the unit type `()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeName<'a> {
    name        : &'a str,
    is_array    : bool,
    is_map      : bool,
    key_name    : Option<&'a str>,
    value_name  : Option<&'a str>,
}

impl<'a> TypeName<'a> {
    /// Name of the unit type.
    pub const UNIT: &'static str = "()";

    /// A plain type name, e.g. `Int`.
    pub fn simple(name: &'a str) -> Self {
        TypeName {
            name        : name,
            is_array    : false,
            is_map      : false,
            key_name    : None,
            value_name  : None,
        }
    }
    /// An array of the named element type, e.g. `[Int]`.
    pub fn array(name: &'a str) -> Self {
        TypeName {
            is_array: true,
            ..Self::simple(name)
        }
    }
    /// A map from the key type to the value type, e.g. `{String:Int}`. The key also serves as the name.
    pub fn map(key_name: &'a str, value_name: &'a str) -> Self {
        TypeName {
            name        : key_name,
            is_array    : false,
            is_map      : true,
            key_name    : Some(key_name),
            value_name  : Some(value_name),
        }
    }
    /// The unit type `()`.
    pub fn unit() -> Self {
        Self::simple(Self::UNIT)
    }
    pub fn name(self: &Self) -> &'a str {
        self.name
    }
    pub fn is_array(self: &Self) -> bool {
        self.is_array
    }
    pub fn is_map(self: &Self) -> bool {
        self.is_map
    }
    pub fn is_unit(self: &Self) -> bool {
        !self.is_array && !self.is_map && self.name == Self::UNIT
    }
    /// Key type name, only set for maps.
    pub fn key_name(self: &Self) -> Option<&'a str> {
        self.key_name
    }
    /// Value type name, only set for maps.
    pub fn value_name(self: &Self) -> Option<&'a str> {
        self.value_name
    }
}

/// A function signature `name :: Inputs* [= Outputs*]`.
///
/// Empty input or output lists are stored as `None`. Outputs are also `None` when no `=` was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSignature<'a> {
    pub name    : &'a str,
    pub inputs  : Option<Vec<TypeName<'a>>>,
    pub outputs : Option<Vec<TypeName<'a>>>,
}

/// A type alias `type Alias Aliased`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAlias<'a> {
    pub alias_name  : &'a str,
    pub type_name   : &'a str,
}

/// An algebraic type definition with an indented block of members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdtTypeDefinition<'a> {
    pub name    : &'a str,
    pub members : Vec<AdtMember<'a>>,
}

/// A tagged member `Tag Type` of an algebraic type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdtMember<'a> {
    pub alias_name  : &'a str,
    pub type_name   : &'a str,
}

/// Either form of a `type` definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDefinition<'a> {
    Alias(TypeAlias<'a>),
    Adt(AdtTypeDefinition<'a>),
}

impl<'a> TypeDefinition<'a> {
    /// Name of the defined type.
    pub fn name(self: &Self) -> &'a str {
        match self {
            TypeDefinition::Alias(alias) => alias.alias_name,
            TypeDefinition::Adt(adt) => adt.name,
        }
    }
}

/// A variable bound at a position within a deconstructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeconstructorBinding<'a> {
    pub index   : usize,
    pub var_name: &'a str,
}

/// A single element within a deconstructor's parentheses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeconstructorElement<'a> {
    Deconstructor(Deconstructor<'a>),
    Binding(DeconstructorBinding<'a>),
}

/// A nested pattern `(Type a (Inner b c))`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deconstructor<'a> {
    pub type_name   : &'a str,
    pub bindings    : Vec<DeconstructorElement<'a>>,
}

impl<'a> Deconstructor<'a> {
    /// Iterates over the leaf bindings of this and all nested deconstructors, depth first.
    pub fn leaf_bindings(self: &Self) -> Vec<&DeconstructorBinding<'a>> {
        let mut result = Vec::new();
        for element in &self.bindings {
            match element {
                DeconstructorElement::Deconstructor(inner) => result.extend(inner.leaf_bindings()),
                DeconstructorElement::Binding(binding) => result.push(binding),
            }
        }
        result
    }
}

/// A top level declaration of a module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration<'a> {
    Type(TypeDefinition<'a>),
    Function(FunctionSignature<'a>),
}

impl<'a> Declaration<'a> {
    /// Name of the declared type or function.
    pub fn name(self: &Self) -> &'a str {
        match self {
            Declaration::Type(definition) => definition.name(),
            Declaration::Function(signature) => signature.name,
        }
    }
    pub fn as_type_definition(self: &Self) -> Option<&TypeDefinition<'a>> {
        match self {
            Declaration::Type(definition) => Some(definition),
            Declaration::Function(_) => None,
        }
    }
    pub fn as_function_signature(self: &Self) -> Option<&FunctionSignature<'a>> {
        match self {
            Declaration::Type(_) => None,
            Declaration::Function(signature) => Some(signature),
        }
    }
}

impl<'a> From<TypeDefinition<'a>> for Declaration<'a> {
    fn from(definition: TypeDefinition<'a>) -> Declaration<'a> {
        Declaration::Type(definition)
    }
}

impl<'a> From<FunctionSignature<'a>> for Declaration<'a> {
    fn from(signature: FunctionSignature<'a>) -> Declaration<'a> {
        Declaration::Function(signature)
    }
}

/// Any node the grammar can produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<'a> {
    TypeAlias(TypeAlias<'a>),
    AdtTypeDefinition(AdtTypeDefinition<'a>),
    FunctionSignature(FunctionSignature<'a>),
    TypeName(TypeName<'a>),
    Deconstructor(Deconstructor<'a>),
}

impl<'a> Node<'a> {
    /// Returns the node as a type definition, if it is one.
    pub fn as_type_definition(self: &Self) -> Option<TypeDefinition<'a>> {
        match self {
            Node::TypeAlias(alias) => Some(TypeDefinition::Alias(alias.clone())),
            Node::AdtTypeDefinition(adt) => Some(TypeDefinition::Adt(adt.clone())),
            Node::FunctionSignature(_) | Node::TypeName(_) | Node::Deconstructor(_) => None,
        }
    }
}

impl<'a> From<TypeDefinition<'a>> for Node<'a> {
    fn from(definition: TypeDefinition<'a>) -> Node<'a> {
        match definition {
            TypeDefinition::Alias(alias) => Node::TypeAlias(alias),
            TypeDefinition::Adt(adt) => Node::AdtTypeDefinition(adt),
        }
    }
}

impl<'a> From<Declaration<'a>> for Node<'a> {
    fn from(declaration: Declaration<'a>) -> Node<'a> {
        match declaration {
            Declaration::Type(definition) => Node::from(definition),
            Declaration::Function(signature) => Node::FunctionSignature(signature),
        }
    }
}

impl<'a> From<FunctionSignature<'a>> for Node<'a> {
    fn from(signature: FunctionSignature<'a>) -> Node<'a> {
        Node::FunctionSignature(signature)
    }
}

impl<'a> From<TypeName<'a>> for Node<'a> {
    fn from(type_name: TypeName<'a>) -> Node<'a> {
        Node::TypeName(type_name)
    }
}

impl<'a> From<Deconstructor<'a>> for Node<'a> {
    fn from(deconstructor: Deconstructor<'a>) -> Node<'a> {
        Node::Deconstructor(deconstructor)
    }
}
