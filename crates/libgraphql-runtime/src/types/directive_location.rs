use crate::ast;

bitflags::bitflags! {
    /// The locations a directive may be applied at.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DirectiveLocation: u32 {
        const QUERY = 1 << 0;
        const MUTATION = 1 << 1;
        const SUBSCRIPTION = 1 << 2;
        const FIELD = 1 << 3;
        const FRAGMENT_DEFINITION = 1 << 4;
        const FRAGMENT_SPREAD = 1 << 5;
        const INLINE_FRAGMENT = 1 << 6;
        const VARIABLE_DEFINITION = 1 << 7;
        const SCHEMA = 1 << 8;
        const SCALAR = 1 << 9;
        const OBJECT = 1 << 10;
        const FIELD_DEFINITION = 1 << 11;
        const ARGUMENT_DEFINITION = 1 << 12;
        const INTERFACE = 1 << 13;
        const UNION = 1 << 14;
        const ENUM = 1 << 15;
        const ENUM_VALUE = 1 << 16;
        const INPUT_OBJECT = 1 << 17;
        const INPUT_FIELD_DEFINITION = 1 << 18;

        const OPERATION = Self::QUERY.bits()
            | Self::MUTATION.bits()
            | Self::SUBSCRIPTION.bits();
        const EXECUTABLE = Self::OPERATION.bits()
            | Self::FIELD.bits()
            | Self::FRAGMENT_DEFINITION.bits()
            | Self::FRAGMENT_SPREAD.bits()
            | Self::INLINE_FRAGMENT.bits()
            | Self::VARIABLE_DEFINITION.bits();
    }
}
impl From<&ast::schema::DirectiveLocation> for DirectiveLocation {
    fn from(location: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLoc;
        match location {
            AstLoc::Query => DirectiveLocation::QUERY,
            AstLoc::Mutation => DirectiveLocation::MUTATION,
            AstLoc::Subscription => DirectiveLocation::SUBSCRIPTION,
            AstLoc::Field => DirectiveLocation::FIELD,
            AstLoc::FragmentDefinition => DirectiveLocation::FRAGMENT_DEFINITION,
            AstLoc::FragmentSpread => DirectiveLocation::FRAGMENT_SPREAD,
            AstLoc::InlineFragment => DirectiveLocation::INLINE_FRAGMENT,
            AstLoc::VariableDefinition => DirectiveLocation::VARIABLE_DEFINITION,
            AstLoc::Schema => DirectiveLocation::SCHEMA,
            AstLoc::Scalar => DirectiveLocation::SCALAR,
            AstLoc::Object => DirectiveLocation::OBJECT,
            AstLoc::FieldDefinition => DirectiveLocation::FIELD_DEFINITION,
            AstLoc::ArgumentDefinition => DirectiveLocation::ARGUMENT_DEFINITION,
            AstLoc::Interface => DirectiveLocation::INTERFACE,
            AstLoc::Union => DirectiveLocation::UNION,
            AstLoc::Enum => DirectiveLocation::ENUM,
            AstLoc::EnumValue => DirectiveLocation::ENUM_VALUE,
            AstLoc::InputObject => DirectiveLocation::INPUT_OBJECT,
            AstLoc::InputFieldDefinition => DirectiveLocation::INPUT_FIELD_DEFINITION,
        }
    }
}

bitflags::bitflags! {
    /// The points during execution at which a directive's resolver runs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DirectiveInvocationPhase: u8 {
        /// Runs once against the query document, before any field executes.
        /// Typically used to include or exclude parts of the document.
        const QUERY_DOCUMENT = 1 << 0;

        /// Runs against a field immediately before its resolver.
        const BEFORE_FIELD_RESOLUTION = 1 << 1;

        /// Runs against a field after its resolver produced results, before
        /// child fields are resolved.
        const AFTER_FIELD_RESOLUTION = 1 << 2;
    }
}
