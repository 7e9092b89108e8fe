//! A collection of newtypes defining type-strong IDs.

id_u64! {
    /// An identifier for an Application.
    ApplicationId;
    /// An identifier for a Channel
    ChannelId;
    /// An identifier for a slash command.
    CommandId;
    /// An identifier for a Guild
    GuildId;
    /// An identifier for an interaction.
    InteractionId;
    /// An identifier for a Message
    MessageId;
    /// An identifier for a Role
    RoleId;
    /// An identifier for a User
    UserId;
}
