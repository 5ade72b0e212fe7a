//! Message Type Generation Macros
//!
//! Three body shapes cover the catalog:
//! - `group_message!`: body is a field group (presence vector plus fields)
//! - `query_message!`: body is only the presence vector of the group being queried
//! - `empty_message!`: no body
//!
//! The command code is the `CommandCode` variant with the same name as the type.

/// Generate a message type whose body is a field group
///
/// The message dereferences to the group, so the group's setters and getters
/// are available directly on the message.
#[macro_export]
macro_rules! group_message {
    ($(#[$meta:meta])* $name:ident => $group:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            fields: $group,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn fields(&self) -> &$group {
                &self.fields
            }

            pub fn fields_mut(&mut self) -> &mut $group {
                &mut self.fields
            }

            pub fn into_fields(self) -> $group {
                self.fields
            }
        }

        impl ::core::convert::From<$group> for $name {
            fn from(fields: $group) -> Self {
                Self { fields }
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $group;

            fn deref(&self) -> &$group {
                &self.fields
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $group {
                &mut self.fields
            }
        }

        impl $crate::MessageBody for $name {
            const COMMAND_CODE: $crate::CommandCode = $crate::CommandCode::$name;
            const NAME: &'static str = stringify!($name);

            fn presence_vector_size(&self, version: $crate::JausVersion) -> usize {
                <$group as $crate::fields::FieldGroup>::LAYOUT.size(version)
            }

            fn presence_vector_mask(&self, version: $crate::JausVersion) -> u32 {
                <$group as $crate::fields::FieldGroup>::LAYOUT.mask(version)
            }

            fn presence_vector(&self) -> u32 {
                $crate::fields::FieldGroup::presence(&self.fields)
            }

            fn body_size(&self, version: $crate::JausVersion) -> usize {
                <Self as $crate::MessageBody>::presence_vector_size(self, version)
                    + $crate::fields::FieldGroup::encoded_size(&self.fields)
            }

            fn encode_body(
                &self,
                stream: &mut $crate::Stream,
                version: $crate::JausVersion,
            ) -> $crate::JausResult<usize> {
                let size = <Self as $crate::MessageBody>::presence_vector_size(self, version);
                let vector = <Self as $crate::MessageBody>::presence_vector(self);
                let written = stream.write_presence_vector(vector, size);
                Ok(written + $crate::fields::FieldGroup::encode(&self.fields, stream))
            }

            fn decode_body(
                &mut self,
                stream: &mut $crate::Stream,
                version: $crate::JausVersion,
            ) -> $crate::JausResult<usize> {
                let size = <Self as $crate::MessageBody>::presence_vector_size(self, version);
                let mask = <Self as $crate::MessageBody>::presence_vector_mask(self, version);
                let name = <Self as $crate::MessageBody>::NAME;
                let presence = $crate::message::read_presence_vector(stream, size, mask, name)?;
                let consumed = $crate::fields::FieldGroup::decode(&mut self.fields, stream, presence)?;
                Ok(size + consumed)
            }
        }
    };
}

/// Generate a query message whose body is the presence vector of `$group`
///
/// Each set bit asks the receiver to include that field in its report.
#[macro_export]
macro_rules! query_message {
    ($(#[$meta:meta])* $name:ident => $group:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            presence_vector: u32,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Query for the fields whose bits are set in `presence_vector`
            pub fn requesting(presence_vector: u32) -> Self {
                Self { presence_vector }
            }

            /// Add the field at `bit` to the request
            pub fn request(&mut self, bit: u32) {
                $crate::set_bit(&mut self.presence_vector, bit, true);
            }

            pub fn is_requested(&self, bit: u32) -> bool {
                $crate::is_bit_set(self.presence_vector, bit)
            }

            pub fn set_presence_vector(&mut self, presence_vector: u32) {
                self.presence_vector = presence_vector;
            }
        }

        impl $crate::MessageBody for $name {
            const COMMAND_CODE: $crate::CommandCode = $crate::CommandCode::$name;
            const NAME: &'static str = stringify!($name);

            fn presence_vector_size(&self, version: $crate::JausVersion) -> usize {
                <$group as $crate::fields::FieldGroup>::LAYOUT.size(version)
            }

            fn presence_vector_mask(&self, version: $crate::JausVersion) -> u32 {
                <$group as $crate::fields::FieldGroup>::LAYOUT.mask(version)
            }

            fn presence_vector(&self) -> u32 {
                self.presence_vector
            }

            fn body_size(&self, version: $crate::JausVersion) -> usize {
                <Self as $crate::MessageBody>::presence_vector_size(self, version)
            }

            fn encode_body(
                &self,
                stream: &mut $crate::Stream,
                version: $crate::JausVersion,
            ) -> $crate::JausResult<usize> {
                let size = <Self as $crate::MessageBody>::presence_vector_size(self, version);
                Ok(stream.write_presence_vector(self.presence_vector, size))
            }

            fn decode_body(
                &mut self,
                stream: &mut $crate::Stream,
                version: $crate::JausVersion,
            ) -> $crate::JausResult<usize> {
                let size = <Self as $crate::MessageBody>::presence_vector_size(self, version);
                let mask = <Self as $crate::MessageBody>::presence_vector_mask(self, version);
                let name = <Self as $crate::MessageBody>::NAME;
                self.presence_vector = $crate::message::read_presence_vector(stream, size, mask, name)?;
                Ok(size)
            }
        }
    };
}

/// Generate a message type without a body
#[macro_export]
macro_rules! empty_message {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                Self
            }
        }

        impl $crate::MessageBody for $name {
            const COMMAND_CODE: $crate::CommandCode = $crate::CommandCode::$name;
            const NAME: &'static str = stringify!($name);

            fn presence_vector_size(&self, _version: $crate::JausVersion) -> usize {
                0
            }

            fn presence_vector_mask(&self, _version: $crate::JausVersion) -> u32 {
                0
            }

            fn presence_vector(&self) -> u32 {
                0
            }

            fn body_size(&self, _version: $crate::JausVersion) -> usize {
                0
            }

            fn encode_body(
                &self,
                _stream: &mut $crate::Stream,
                _version: $crate::JausVersion,
            ) -> $crate::JausResult<usize> {
                Ok(0)
            }

            fn decode_body(
                &mut self,
                _stream: &mut $crate::Stream,
                _version: $crate::JausVersion,
            ) -> $crate::JausResult<usize> {
                Ok(0)
            }
        }
    };
}
